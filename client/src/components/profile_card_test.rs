use super::*;
use crate::test_support::sample_user;

#[test]
fn profile_rows_in_display_order() {
    let rows = profile_rows(&sample_user());
    let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["Full Name", "Email Address", "Phone Number", "Age", "Address"]);
}

#[test]
fn profile_rows_values() {
    let rows = profile_rows(&sample_user());
    assert_eq!(rows[0].1, "Ms Shirin Kazemi");
    assert_eq!(rows[1].1, "shirin.kazemi@example.com");
    assert_eq!(rows[2].1, "021-12345678");
    assert_eq!(rows[3].1, "35 years old");
    assert_eq!(rows[4].1, "4312 Valiasr St, Tehran");
}
