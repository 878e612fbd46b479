use crate::domain::money::Cents;
use crate::error::{Result, VendingError};
use serde::Serialize;

/// A coin kind the machine accepts, e.g. `QUARTER` worth 25.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denomination {
    id: String,
    face_value: Cents,
}

impl Denomination {
    /// Face values must be positive and no larger than [`Cents::MAX_UNIT`].
    pub fn new(id: impl Into<String>, face_value: Cents) -> Result<Self> {
        let id = id.into();
        if face_value.is_zero() {
            return Err(VendingError::ValidationError(format!(
                "Denomination {id} must have a positive face value"
            )));
        }
        if face_value > Cents::MAX_UNIT {
            return Err(VendingError::ValidationError(format!(
                "Denomination {id} face value {face_value} exceeds {}",
                Cents::MAX_UNIT
            )));
        }
        Ok(Self { id, face_value })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn face_value(&self) -> Cents {
        self.face_value
    }
}

/// The fixed set of known denominations.
///
/// Entries are kept ordered from the highest face value to the lowest,
/// whatever order they were registered in. Denominations of equal value keep
/// their registration order.
#[derive(Debug, Clone)]
pub struct DenominationTable {
    denominations: Vec<Denomination>,
}

impl DenominationTable {
    pub fn new(mut denominations: Vec<Denomination>) -> Result<Self> {
        if denominations.is_empty() {
            return Err(VendingError::ValidationError(
                "At least one denomination is required".to_string(),
            ));
        }
        for (i, denomination) in denominations.iter().enumerate() {
            if denominations[..i].iter().any(|d| d.id == denomination.id) {
                return Err(VendingError::DuplicateDenomination(
                    denomination.id.clone(),
                ));
            }
        }
        denominations.sort_by(|a, b| b.face_value.cmp(&a.face_value));
        Ok(Self { denominations })
    }

    pub fn has_denomination(&self, id: &str) -> bool {
        self.denominations.iter().any(|d| d.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Denomination> {
        self.denominations.iter().find(|d| d.id == id)
    }

    pub fn face_value(&self, id: &str) -> Result<Cents> {
        self.get(id)
            .map(Denomination::face_value)
            .ok_or_else(|| VendingError::UnknownDenomination(id.to_string()))
    }

    /// Iterates from the highest face value to the lowest.
    pub fn iter(&self) -> impl Iterator<Item = &Denomination> {
        self.denominations.iter()
    }

    pub fn len(&self) -> usize {
        self.denominations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.denominations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn denomination(id: &str, value: u64) -> Denomination {
        Denomination::new(id, Cents::new(value)).unwrap()
    }

    #[test]
    fn test_table_orders_by_face_value_descending() {
        let table = DenominationTable::new(vec![
            denomination("DOLLAR", 100),
            denomination("DIME", 10),
            denomination("NICKEL", 5),
            denomination("QUARTER", 25),
        ])
        .unwrap();

        let ids: Vec<&str> = table.iter().map(Denomination::id).collect();
        assert_eq!(ids, vec!["DOLLAR", "QUARTER", "DIME", "NICKEL"]);
    }

    #[test]
    fn test_face_value_lookup() {
        let table = DenominationTable::new(vec![denomination("DIME", 10)]).unwrap();
        assert_eq!(table.face_value("DIME").unwrap(), Cents::new(10));
        assert!(matches!(
            table.face_value("PENNY"),
            Err(VendingError::UnknownDenomination(id)) if id == "PENNY"
        ));
        assert!(table.has_denomination("DIME"));
        assert!(!table.has_denomination("dime"));
    }

    #[test]
    fn test_zero_face_value_rejected() {
        assert!(matches!(
            Denomination::new("SLUG", Cents::ZERO),
            Err(VendingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_oversized_face_value_rejected() {
        assert!(Denomination::new("BAR", Cents::MAX_UNIT).is_ok());
        assert!(matches!(
            Denomination::new("BAR", Cents::new(Cents::MAX_UNIT.value() + 1)),
            Err(VendingError::ValidationError(_))
        ));
    }

    #[test]
    fn test_duplicate_and_empty_tables_rejected() {
        assert!(matches!(
            DenominationTable::new(vec![denomination("DIME", 10), denomination("DIME", 10)]),
            Err(VendingError::DuplicateDenomination(_))
        ));
        assert!(matches!(
            DenominationTable::new(Vec::new()),
            Err(VendingError::ValidationError(_))
        ));
    }
}
