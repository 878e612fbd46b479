use crate::domain::ports::{CommandSource, ResponseSink};
use crate::error::Result;
use async_trait::async_trait;
use std::io::IsTerminal;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin, Stdout,
};

const PROMPT: &[u8] = b"> ";
const RESPONSE_MARKER: &str = "-> ";

/// Reads command lines from a terminal or pipe.
pub struct ConsoleSource<R> {
    lines: Lines<R>,
    prompt: bool,
}

impl ConsoleSource<BufReader<Stdin>> {
    /// Reads from stdin, prompting only when a person is typing.
    pub fn stdin() -> Self {
        let prompt = std::io::stdin().is_terminal();
        Self::new(BufReader::new(tokio::io::stdin()), prompt)
    }
}

impl<R: AsyncBufRead + Unpin + Send> ConsoleSource<R> {
    pub fn new(reader: R, prompt: bool) -> Self {
        Self {
            lines: reader.lines(),
            prompt,
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> CommandSource for ConsoleSource<R> {
    async fn next_line(&mut self) -> Result<Option<String>> {
        if self.prompt {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(PROMPT).await?;
            stdout.flush().await?;
        }
        Ok(self.lines.next_line().await?)
    }
}

/// Prints `-> <response>` for every processed line.
pub struct ConsoleSink<W> {
    writer: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ResponseSink for ConsoleSink<W> {
    async fn emit(&mut self, _line: &str, response: &str) -> Result<()> {
        let output = format!("{RESPONSE_MARKER}{response}\n");
        self.writer.write_all(output.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
