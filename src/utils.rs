/// Split a comma-separated field list such as `"name, email"`.
///
/// Names are trimmed and empty entries dropped, so `""` gives no fields.
pub fn split_field_list(fields: &str) -> Vec<String> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_field_list_trims_names() {
        assert_eq!(
            split_field_list("name, email ,partner_id.name"),
            vec!["name", "email", "partner_id.name"]
        );
    }

    #[test]
    fn split_field_list_empty() {
        assert!(split_field_list("").is_empty());
        assert!(split_field_list(" , ").is_empty());
    }
}
