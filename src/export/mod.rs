pub(crate) mod error;

use crate::export::error::ExportError;
use crate::export::error::ExportError::CsvFinalizationFailed;
use crate::tools::log_message_and_return;
use chrono::NaiveDate;
use dto::member::Member;
use dto::member_status::MemberStatus::{Active, Expired};
use dto::member_status::compute_member_status;

pub const CSV_HEADER: [&str; 5] = [
    "first_name",
    "last_name",
    "membership",
    "is_student",
    "university",
];

const EXPIRED_LABEL: &str = "Expired";

/// The membership column of an export row.
/// An expired membership never leaks its last product description:
/// the exported label is the literal `Expired`.
pub fn product_label(member: &Member) -> String {
    match compute_member_status(member) {
        Active => member
            .latest_product()
            .map(|product| product.description().clone())
            .unwrap_or_else(|| EXPIRED_LABEL.to_owned()),
        Expired => EXPIRED_LABEL.to_owned(),
    }
}

/// Project members into flat export rows, one per member, in input order.
/// No header row is included: the caller prepends [CSV_HEADER].
pub fn member_rows(members: &[Member]) -> Vec<[String; 5]> {
    members.iter().map(member_row).collect()
}

fn member_row(member: &Member) -> [String; 5] {
    [
        member.first_name().clone(),
        member.last_name().clone(),
        product_label(member),
        member.is_student().to_string(),
        member.university().clone().unwrap_or_default(),
    ]
}

/// Assemble the complete export: header row, then regular members,
/// then summer pass members, all through the same row projection.
pub fn write_members_csv(
    members: &[Member],
    summer_pass_members: &[Member],
) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(CSV_HEADER)?;
    for row in member_rows(members)
        .iter()
        .chain(member_rows(summer_pass_members).iter())
    {
        writer.write_record(row)?;
    }

    writer.into_inner().map_err(log_message_and_return(
        "Can't finalize CSV buffer.",
        CsvFinalizationFailed,
    ))
}

/// `<club-name>-members-<yyyy-MM-dd>.csv`
pub fn export_filename(club_name: &str, date: NaiveDate) -> String {
    format!("{club_name}-members-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    mod product_label {
        use crate::export::product_label;
        use dto::member::Member;
        use dto::member::tests::{expired_member, productless_member};
        use dto::product::{Product, ProductAssignment};

        #[test]
        fn active_membership_keeps_its_description() {
            let member = Member::new(
                "member-1".to_owned(),
                "Jane".to_owned(),
                "Keeper".to_owned(),
                "jane.keeper@club.test".to_owned(),
                None,
                false,
                None,
                vec![ProductAssignment::new(Some(Product::new(
                    "Full Member".to_owned(),
                    Some("01-01-2999".to_owned()),
                )))],
            );

            assert_eq!("Full Member", product_label(&member));
        }

        #[test]
        fn expired_membership_never_leaks_its_description() {
            assert_eq!("Expired", product_label(&expired_member()));
        }

        #[test]
        fn productless_member_is_expired() {
            assert_eq!("Expired", product_label(&productless_member()));
        }
    }

    mod member_rows {
        use crate::export::member_rows;
        use dto::member::Member;
        use dto::member::tests::{active_member, expired_member};
        use dto::product::{Product, ProductAssignment};

        #[test]
        fn empty_input_yields_no_rows() {
            assert!(member_rows(&[]).is_empty());
        }

        #[test]
        fn rows_follow_input_order() {
            let rows = member_rows(&[expired_member(), active_member()]);

            assert_eq!(2, rows.len());
            assert_eq!("Jon", rows[0][0]);
            assert_eq!("Jane", rows[1][0]);
        }

        #[test]
        fn row_has_the_five_expected_columns() {
            let member = Member::new(
                "member-1".to_owned(),
                "Noa".to_owned(),
                "Swift".to_owned(),
                "noa.swift@club.test".to_owned(),
                Some("Seeker".to_owned()),
                true,
                Some("University of Lincoln".to_owned()),
                vec![ProductAssignment::new(Some(Product::new(
                    "Student Membership".to_owned(),
                    Some("31-12-2999".to_owned()),
                )))],
            );

            let rows = member_rows(&[member]);

            assert_eq!(
                [
                    "Noa".to_owned(),
                    "Swift".to_owned(),
                    "Student Membership".to_owned(),
                    "true".to_owned(),
                    "University of Lincoln".to_owned(),
                ],
                rows[0]
            );
        }

        #[test]
        fn missing_university_becomes_an_empty_column() {
            let rows = member_rows(&[active_member()]);

            assert_eq!("", rows[0][4]);
        }
    }

    mod write_members_csv {
        use crate::export::{CSV_HEADER, write_members_csv};
        use dto::member::tests::{active_member, expired_member, productless_member};

        #[test]
        fn header_then_members_then_summer_pass_members() {
            let csv = write_members_csv(
                &[active_member(), expired_member()],
                &[productless_member()],
            )
            .unwrap();

            let content = String::from_utf8(csv).unwrap();
            let lines: Vec<&str> = content.lines().collect();
            assert_eq!(4, lines.len());
            assert_eq!(CSV_HEADER.join(","), lines[0]);
            assert!(lines[1].starts_with("Jane,Keeper,"));
            assert!(lines[2].starts_with("Jon,Seeker,Expired,"));
            assert!(lines[3].starts_with("Robin,Chaser,Expired,"));
        }

        #[test]
        fn empty_populations_yield_only_the_header() {
            let csv = write_members_csv(&[], &[]).unwrap();

            let content = String::from_utf8(csv).unwrap();
            assert_eq!(vec![CSV_HEADER.join(",")], content.lines().collect::<Vec<_>>());
        }
    }

    mod export_filename {
        use crate::export::export_filename;
        use chrono::NaiveDate;

        #[test]
        fn success() {
            let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
            assert_eq!(
                "London Unicorns-members-2026-08-29.csv",
                export_filename("London Unicorns", date)
            );
        }
    }
}
