use crate::{domain::TransactionKind, errors::ValidationError};

/// Validated input for a new transaction, before it gets an id and a date.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    /// Validates already-typed values. The description is trimmed.
    pub fn new(
        description: &str,
        amount: f64,
        kind: TransactionKind,
    ) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() || amount == 0.0 || !amount.is_finite() {
            return Err(ValidationError::MissingField);
        }
        if amount < 0.0 {
            return Err(ValidationError::NonPositiveAmount);
        }
        Ok(Self {
            description: description.to_string(),
            amount,
            kind,
        })
    }

    /// Validates raw strings from an input form.
    pub fn parse(description: &str, amount: &str, kind: &str) -> Result<Self, ValidationError> {
        let amount = amount.trim().parse::<f64>().unwrap_or(f64::NAN);
        let kind = kind
            .parse::<TransactionKind>()
            .map_err(|_| ValidationError::MissingField)?;
        Self::new(description, amount, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_converts() {
        let draft = TransactionDraft::parse("  Coffee ", " 4.50", "expense").unwrap();
        assert_eq!(draft.description, "Coffee");
        assert_eq!(draft.amount, 4.5);
        assert_eq!(draft.kind, TransactionKind::Expense);
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert_eq!(
            TransactionDraft::parse("   ", "10", "income"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            TransactionDraft::parse("Salary", "", "income"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            TransactionDraft::parse("Salary", "ten", "income"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            TransactionDraft::parse("Salary", "10", ""),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            TransactionDraft::parse("Salary", "0", "income"),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            TransactionDraft::new("Salary", f64::INFINITY, TransactionKind::Income),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn negative_amounts_are_not_positive() {
        assert_eq!(
            TransactionDraft::parse("Refund", "-3", "income"),
            Err(ValidationError::NonPositiveAmount)
        );
    }
}
