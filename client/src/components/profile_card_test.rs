use super::*;

fn profile(attributes: &[(&str, &str)]) -> UserProfile {
    UserProfile {
        username: "alice".into(),
        attributes: attributes
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    }
}

#[test]
fn rows_without_attributes_show_only_username() {
    assert_eq!(profile_rows(&profile(&[])), vec![("User ID", "alice".to_owned())]);
}

#[test]
fn rows_include_email_and_name() {
    let rows = profile_rows(&profile(&[("email", "a@b.com"), ("name", "Alice"), ("sub", "1234")]));
    assert_eq!(
        rows,
        vec![
            ("User ID", "alice".to_owned()),
            ("Email", "a@b.com".to_owned()),
            ("Name", "Alice".to_owned()),
        ]
    );
}
