/// Conditional class-list combinator: joins the `Some` entries with spaces.
pub fn clsx(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_present_classes() {
        assert_eq!(
            clsx(&[Some("field-input"), None, Some("field-invalid")]),
            "field-input field-invalid"
        );
    }

    #[test]
    fn empty_and_all_none_yield_empty_string() {
        assert_eq!(clsx(&[]), "");
        assert_eq!(clsx(&[None, None]), "");
    }

    #[test]
    fn single_class_has_no_padding() {
        assert_eq!(clsx(&[Some("tag")]), "tag");
    }
}
