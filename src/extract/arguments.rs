//! Balanced-delimiter scan of a call's argument list.
//!
//! Given the offset where a recognized call was matched, the scanner finds
//! the call's opening parenthesis, walks forward counting nested parens
//! until they balance, and splits the enclosed text into `name = value`
//! pairs. Malformed or truncated source is tolerated: the worst case is an
//! empty mapping, never an error.

use crate::types::Hyperparameters;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::literal::decode_literal;

/// Repeated `name = value` pattern over the argument text. The value
/// alternation lets one level of bracketed nesting keep its internal
/// commas; deeper nesting may under- or over-split, an accepted limitation
/// of scanning code without a real parser.
static ARG_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+)\s*=\s*((?:\[[^\]]*\]|\([^)]*\)|\{[^}]*\}|[^,])+)")
        .expect("Invalid regex: argument pair")
});

/// Extract the argument mapping of the call matched at `from`.
///
/// `from` is a byte offset into `source` at or before the call's opening
/// parenthesis (typically the match start of the call name). Returns an
/// empty mapping when no parenthesis follows or the parens never balance.
pub fn parse_call_arguments(source: &str, from: usize) -> Hyperparameters {
    let mut args = Hyperparameters::new();

    let Some(open) = find_open_paren(source, from) else {
        return args;
    };
    let Some(close) = matching_close_paren(source, open) else {
        debug!("unbalanced parentheses after offset {open}, skipping argument scan");
        return args;
    };

    for caps in ARG_PAIR.captures_iter(&source[open + 1..close]) {
        // Later duplicates overwrite earlier ones; the key keeps its
        // first-seen position.
        args.insert(caps[1].to_string(), decode_literal(&caps[2]));
    }

    args
}

fn find_open_paren(source: &str, from: usize) -> Option<usize> {
    if from > source.len() {
        return None;
    }
    source[from..].find('(').map(|i| from + i)
}

/// Position of the parenthesis closing the one at `open`. Only the paren
/// pair is counted; brackets and braces inside are opaque text.
fn matching_close_paren(source: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, ch) in source[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_well_formed_call() {
        let source = r#"model = RandomForestClassifier(max_depth=5, n_estimators=100)"#;
        let args = parse_call_arguments(source, source.find("Random").unwrap());

        assert_eq!(args.len(), 2);
        assert_eq!(args["max_depth"], ParamValue::Int(5));
        assert_eq!(args["n_estimators"], ParamValue::Int(100));
    }

    #[test]
    fn test_string_and_float_values() {
        let source = r#"SVC(kernel="rbf", C=1.5)"#;
        let args = parse_call_arguments(source, 0);

        assert_eq!(args["kernel"], ParamValue::Str("rbf".to_string()));
        assert_eq!(args["C"], ParamValue::Float(1.5));
    }

    #[test]
    fn test_no_parenthesis_yields_empty() {
        let args = parse_call_arguments("torch.nn.Module", 0);
        assert!(args.is_empty());
    }

    #[test]
    fn test_unbalanced_parens_yield_empty() {
        let source = "Name(a=1, b=2";
        let args = parse_call_arguments(source, 0);
        assert!(args.is_empty());
    }

    #[test]
    fn test_offset_past_end_yields_empty() {
        let args = parse_call_arguments("short", 100);
        assert!(args.is_empty());
    }

    #[test]
    fn test_positional_arguments_are_ignored() {
        let source = "fit(X, y, epochs=10)";
        let args = parse_call_arguments(source, 0);

        assert_eq!(args.len(), 1);
        assert_eq!(args["epochs"], ParamValue::Int(10));
    }

    #[test]
    fn test_nested_call_inside_value() {
        let source = "MLPClassifier(hidden_layer_sizes=(64, 32), max_iter=200)";
        let args = parse_call_arguments(source, 0);

        assert_eq!(
            args["hidden_layer_sizes"],
            ParamValue::List(vec![ParamValue::Int(64), ParamValue::Int(32)])
        );
        assert_eq!(args["max_iter"], ParamValue::Int(200));
    }

    #[test]
    fn test_list_value_keeps_internal_commas() {
        let source = "GridModel(layers=[128, 64, 32], activation='relu')";
        let args = parse_call_arguments(source, 0);

        assert_eq!(
            args["layers"],
            ParamValue::List(vec![
                ParamValue::Int(128),
                ParamValue::Int(64),
                ParamValue::Int(32)
            ])
        );
        assert_eq!(args["activation"], ParamValue::Str("relu".to_string()));
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let source = "Model(depth=3, width=2, depth=9)";
        let args = parse_call_arguments(source, 0);

        assert_eq!(args["depth"], ParamValue::Int(9));
        let keys: Vec<&str> = args.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["depth", "width"]);
    }

    #[test]
    fn test_scan_starts_at_first_paren_after_offset() {
        let source = "x = 1\nmodel = SVC(C=2)";
        let args = parse_call_arguments(source, source.find("SVC").unwrap());
        assert_eq!(args["C"], ParamValue::Int(2));
    }

    #[test]
    fn test_empty_argument_list() {
        let args = parse_call_arguments("LinearRegression()", 0);
        assert!(args.is_empty());
    }

    #[test]
    fn test_non_literal_value_kept_as_raw_text() {
        let source = "Model(seed=rng.next(), depth=4)";
        let args = parse_call_arguments(source, 0);

        assert_eq!(args["seed"], ParamValue::Raw("rng.next()".to_string()));
        assert_eq!(args["depth"], ParamValue::Int(4));
    }
}
