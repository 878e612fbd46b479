pub mod transcript_writer;
