use super::*;

#[test]
fn rows_without_summary_are_unavailable() {
    let rows = config_rows(None);
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|(_, value)| value == UNAVAILABLE));
}

#[test]
fn rows_follow_summary() {
    let summary = ConfigSummary {
        region: "ap-northeast-1".into(),
        user_pool_id: "configured".into(),
        client_id: "configured".into(),
        domain: "not configured".into(),
        redirect_sign_in: "http://localhost:3000/auth/callback".into(),
    };
    let rows = config_rows(Some(&summary));
    assert_eq!(
        rows,
        vec![
            ("Region", "ap-northeast-1".to_owned()),
            ("User Pool ID", "configured".to_owned()),
            ("Client ID", "configured".to_owned()),
            ("Domain", "not configured".to_owned()),
            ("Redirect URL", "http://localhost:3000/auth/callback".to_owned()),
        ]
    );
}
