//! Structured instruction parser
//!
//! Turns instruction text into a [`CanonicalInstruction`]. Both surface forms
//! go through the same anchor walk, driven by a [`FormatDescriptor`]:
//!
//! 1. lead keyword (`debit` / `credit`)
//! 2. first lead preposition (`from` / `to`) in the text, which must follow
//!    the lead
//! 3. `for` after the lead, and after the lead preposition
//! 4. counter keyword (`credit` / `debit`) right after `for`
//! 5. counter preposition (`to` / `from`) after the counter keyword
//!
//! Fields are then read at fixed offsets from those anchors. Checks run in a
//! fixed order and the first failure is returned.

use super::format::{detect_format, FormatDescriptor};
use super::tokenizer::{find_keyword, tokenize};
use crate::types::{Amount, CanonicalInstruction, Currency, InstructionError};

const ACCOUNT_KEYWORD: &str = "account";
const DATE_KEYWORD: &str = "on";

/// Anchor positions located in the token list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Anchors {
    lead: usize,
    lead_preposition: usize,
    counter_preposition: usize,
}

/// Parse free-text instruction into its canonical form
///
/// # Errors
///
/// - `MalformedInstruction` if no format is recognised
/// - `InvalidKeywordOrder` if an anchor is missing or out of order
/// - `InvalidAmount`, `UnsupportedCurrency`, `MissingKeyword` for bad fields
///
/// Account identifiers and `execute_by` are extracted as written; their
/// well-formedness is the validator's concern.
pub fn parse_instruction(text: &str) -> Result<CanonicalInstruction, InstructionError> {
    let format = detect_format(&text.to_lowercase())?;
    tracing::debug!(format = %format.instruction_type, "detected instruction format");

    let tokens = tokenize(text);
    parse_tokens(&tokens, format)
}

/// Parse a token list with a known format
pub fn parse_tokens(
    tokens: &[&str],
    format: &FormatDescriptor,
) -> Result<CanonicalInstruction, InstructionError> {
    let anchors = locate_anchors(tokens, format)?;

    let amount = parse_amount(token_at(tokens, anchors.lead + 1))?;
    let currency = parse_currency(token_at(tokens, anchors.lead + 2))?;

    let lead_account = account_after(tokens, anchors.lead_preposition, format.lead_preposition)?;
    let counter_account =
        account_after(tokens, anchors.counter_preposition, format.counter_preposition)?;

    let (debit_account, credit_account) = if format.lead_is_debit() {
        (lead_account, counter_account)
    } else {
        (counter_account, lead_account)
    };

    let execute_by = find_keyword(tokens, DATE_KEYWORD, 0)
        .map(|on| token_at(tokens, on + 1).to_string());

    Ok(CanonicalInstruction {
        instruction_type: format.instruction_type,
        amount,
        currency,
        debit_account,
        credit_account,
        execute_by,
    })
}

fn locate_anchors(
    tokens: &[&str],
    format: &FormatDescriptor,
) -> Result<Anchors, InstructionError> {
    let order_error = InstructionError::invalid_keyword_order;

    let lead = find_keyword(tokens, format.lead, 0).ok_or_else(|| order_error(format.lead))?;

    let lead_preposition = find_keyword(tokens, format.lead_preposition, 0)
        .filter(|&preposition| preposition > lead)
        .ok_or_else(|| order_error(format.lead_preposition))?;

    let link = find_keyword(tokens, format.link, lead + 1)
        .filter(|&link| link > lead_preposition)
        .ok_or_else(|| order_error(format.link))?;

    let counter = link + 1;
    if !token_at(tokens, counter).eq_ignore_ascii_case(format.counter) {
        return Err(order_error(format.counter));
    }

    let counter_preposition = find_keyword(tokens, format.counter_preposition, counter + 1)
        .ok_or_else(|| order_error(format.counter_preposition))?;

    Ok(Anchors {
        lead,
        lead_preposition,
        counter_preposition,
    })
}

/// Token at `index`, or the empty string past the end
fn token_at<'a>(tokens: &[&'a str], index: usize) -> &'a str {
    tokens.get(index).copied().unwrap_or_default()
}

/// Parse a plain base-10 positive integer
fn parse_amount(token: &str) -> Result<Amount, InstructionError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InstructionError::invalid_amount(token));
    }

    match token.parse::<Amount>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err(InstructionError::invalid_amount(token)),
    }
}

fn parse_currency(token: &str) -> Result<Currency, InstructionError> {
    let code = token.to_uppercase();
    code.parse::<Currency>()
        .map_err(|_| InstructionError::unsupported_currency(&code))
}

/// Read `account <id>` following the preposition at `preposition`
///
/// A missing id is returned as an empty string.
fn account_after(
    tokens: &[&str],
    preposition: usize,
    keyword: &str,
) -> Result<String, InstructionError> {
    if !token_at(tokens, preposition + 1).eq_ignore_ascii_case(ACCOUNT_KEYWORD) {
        return Err(InstructionError::missing_keyword(keyword));
    }

    Ok(token_at(tokens, preposition + 2).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InstructionType;
    use rstest::rstest;

    #[test]
    fn test_parse_debit_instruction() {
        let instruction =
            parse_instruction("Debit 500 NGN from Account A001 for credit to Account B002")
                .unwrap();

        assert_eq!(
            instruction,
            CanonicalInstruction {
                instruction_type: InstructionType::Debit,
                amount: 500,
                currency: Currency::Ngn,
                debit_account: "A001".to_string(),
                credit_account: "B002".to_string(),
                execute_by: None,
            }
        );
    }

    #[test]
    fn test_parse_credit_instruction() {
        let instruction =
            parse_instruction("Credit 500 NGN to Account B002 for debit from Account A001")
                .unwrap();

        assert_eq!(instruction.instruction_type, InstructionType::Credit);
        assert_eq!(instruction.debit_account, "A001");
        assert_eq!(instruction.credit_account, "B002");
    }

    #[test]
    fn test_debit_and_credit_phrasing_agree() {
        let debit = parse_instruction("DEBIT 75 usd FROM ACCOUNT x-1 FOR CREDIT TO ACCOUNT y-2")
            .unwrap();
        let credit =
            parse_instruction("credit 75 USD to account y-2 for debit from account x-1").unwrap();

        assert_eq!(debit.amount, credit.amount);
        assert_eq!(debit.currency, credit.currency);
        assert_eq!(debit.debit_account, credit.debit_account);
        assert_eq!(debit.credit_account, credit.credit_account);
        assert_ne!(debit.instruction_type, credit.instruction_type);
    }

    #[rstest]
    #[case::debit_date(
        "Debit 500 NGN from account A for credit to account B on 2099-01-01",
        Some("2099-01-01")
    )]
    #[case::credit_date(
        "Credit 500 NGN to account B for debit from account A ON 2024-05-01",
        Some("2024-05-01")
    )]
    #[case::no_date("Debit 500 NGN from account A for credit to account B", None)]
    #[case::dangling_on("Debit 500 NGN from account A for credit to account B on", Some(""))]
    #[case::kept_verbatim(
        "Debit 500 NGN from account A for credit to account B on 2024-13-40",
        Some("2024-13-40")
    )]
    fn test_execute_by_extraction(#[case] text: &str, #[case] expected: Option<&str>) {
        let instruction = parse_instruction(text).unwrap();
        assert_eq!(instruction.execute_by.as_deref(), expected);
    }

    #[rstest]
    #[case::zero("Debit 0 NGN from account A for credit to account B", "0")]
    #[case::negative("Debit -5 NGN from account A for credit to account B", "-5")]
    #[case::decimal("Debit 10.50 NGN from account A for credit to account B", "10.50")]
    #[case::word("Debit ten NGN from account A for credit to account B", "ten")]
    #[case::trailing_junk("Debit 500abc NGN from account A for credit to account B", "500abc")]
    #[case::too_large(
        "Debit 99999999999999999999999 NGN from account A for credit to account B",
        "99999999999999999999999"
    )]
    fn test_invalid_amount(#[case] text: &str, #[case] amount: &str) {
        assert_eq!(
            parse_instruction(text),
            Err(InstructionError::invalid_amount(amount))
        );
    }

    #[rstest]
    #[case::eur("Debit 500 EUR from account A for credit to account B", "EUR")]
    #[case::lowercase_unknown("Credit 500 jpy to account B for debit from account A", "JPY")]
    fn test_unsupported_currency(#[case] text: &str, #[case] currency: &str) {
        assert_eq!(
            parse_instruction(text),
            Err(InstructionError::unsupported_currency(currency))
        );
    }

    #[test]
    fn test_lowercase_currency_is_normalised() {
        let instruction =
            parse_instruction("Debit 5 ghs from account A for credit to account B").unwrap();
        assert_eq!(instruction.currency, Currency::Ghs);
    }

    #[rstest]
    #[case::missing_after_from(
        "Debit 500 NGN from A for credit to account B from account",
        "from"
    )]
    #[case::missing_after_to(
        "Credit 500 NGN to B for debit from account A to account",
        "to"
    )]
    #[case::missing_counter_account(
        "Debit 500 NGN from account A for credit to B for credit to account C",
        "to"
    )]
    fn test_missing_account_keyword(#[case] text: &str, #[case] after: &str) {
        assert_eq!(
            parse_instruction(text),
            Err(InstructionError::missing_keyword(after))
        );
    }

    #[rstest]
    #[case::for_before_from(
        "Debit 500 NGN for credit to account B from account A",
        "for"
    )]
    #[case::counter_not_after_for(
        "Debit 500 NGN from account A for the credit to account B for credit to account C",
        "credit"
    )]
    #[case::credit_for_before_to(
        "Credit 500 NGN for debit from account A to account B",
        "for"
    )]
    #[case::from_before_debit(
        "From today debit 500 NGN from account A for credit to account B",
        "from"
    )]
    #[case::to_before_credit(
        "To be clear credit 500 NGN to account B for debit from account A",
        "to"
    )]
    fn test_invalid_keyword_order(#[case] text: &str, #[case] keyword: &str) {
        assert_eq!(
            parse_instruction(text),
            Err(InstructionError::invalid_keyword_order(keyword))
        );
    }

    #[test]
    fn test_unrecognised_text_is_malformed() {
        assert_eq!(
            parse_instruction("Send 500 NGN to B"),
            Err(InstructionError::MalformedInstruction)
        );
    }

    #[test]
    fn test_missing_account_id_is_empty() {
        let instruction =
            parse_instruction("Debit 500 NGN from account A for credit to account").unwrap();
        assert_eq!(instruction.credit_account, "");
    }

    #[test]
    fn test_extra_spaces_are_ignored() {
        let instruction = parse_instruction(
            "  Debit   500  NGN from account  A001  for credit to account  B002  on  2025-07-01 ",
        )
        .unwrap();
        assert_eq!(instruction.amount, 500);
        assert_eq!(instruction.debit_account, "A001");
        assert_eq!(instruction.credit_account, "B002");
        assert_eq!(instruction.execute_by.as_deref(), Some("2025-07-01"));
    }

    #[rstest]
    #[case::split_from_account("Debit 500 NGN from  account A001 for credit to account B002")]
    #[case::split_link_phrase("Debit 500 NGN from account A001 for  credit to account B002")]
    #[case::split_to_account("Credit 500 NGN to  account B002 for debit from account A001")]
    fn test_spaces_inside_phrase_are_malformed(#[case] text: &str) {
        assert_eq!(
            parse_instruction(text),
            Err(InstructionError::MalformedInstruction)
        );
    }
}
