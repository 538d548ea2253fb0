use holdings_export::{
    Company, CompanyIndex, CsvOptions, ExportError, Quoting, UnresolvedCompany,
    generate_holdings_csv, generate_holdings_csv_with, get_company_names,
};

use crate::common::user;

fn sample() -> (Vec<holdings_export::UserHoldings>, CompanyIndex) {
    let index: CompanyIndex = [("1", "Smith, Jones & Co"), ("2", "Plain Ltd")]
        .into_iter()
        .collect();
    let users = vec![
        user("1", "Bob", "Smith", "2020-01-01", 1000.0, &[("1", 0.5), ("2", 0.5)]),
        user("2", "Amy", "Quote\"d", "2020-01-02", 10.0, &[("2", 1.0)]),
    ];
    (users, index)
}

#[test]
fn default_options_match_plain_generator() {
    let (users, index) = sample();
    let with = generate_holdings_csv_with(&users, &index, &CsvOptions::default()).unwrap();
    assert_eq!(with, generate_holdings_csv(&users, &index));
}

#[test]
fn empty_input_with_options_is_empty() {
    let opts = CsvOptions {
        quoting: Quoting::Necessary,
        unresolved: UnresolvedCompany::Fail,
    };
    assert_eq!(generate_holdings_csv_with(&[], &CompanyIndex::default(), &opts).unwrap(), "");
}

#[test]
fn necessary_quoting_escapes_delimiters_and_quotes() {
    let (users, index) = sample();
    let opts = CsvOptions {
        quoting: Quoting::Necessary,
        ..CsvOptions::default()
    };

    let csv = generate_holdings_csv_with(&users, &index, &opts).unwrap();

    assert_eq!(
        csv,
        "1,Bob,Smith,2020-01-01,\"Smith, Jones & Co\",500\n\
1,Bob,Smith,2020-01-01,Plain Ltd,500\n\
2,Amy,\"Quote\"\"d\",2020-01-02,Plain Ltd,10"
    );
}

#[test]
fn placeholder_replaces_unknown_company() {
    let index: CompanyIndex = [("1", "Known")].into_iter().collect();
    let users = vec![user("1", "Bob", "Smith", "2020-01-01", 100.0, &[("99", 1.0)])];
    let opts = CsvOptions {
        unresolved: UnresolvedCompany::Placeholder("UNKNOWN".into()),
        ..CsvOptions::default()
    };

    let csv = generate_holdings_csv_with(&users, &index, &opts).unwrap();

    assert_eq!(csv, "1,Bob,Smith,2020-01-01,UNKNOWN,100");
}

#[test]
fn fail_policy_reports_user_and_company() {
    let index: CompanyIndex = [("1", "Known")].into_iter().collect();
    let users = vec![user("42", "Bob", "Smith", "2020-01-01", 100.0, &[("1", 0.5), ("99", 0.5)])];
    let opts = CsvOptions {
        unresolved: UnresolvedCompany::Fail,
        ..CsvOptions::default()
    };

    let err = generate_holdings_csv_with(&users, &index, &opts).unwrap_err();

    match err {
        ExportError::UnresolvedCompany { user_id, company_id } => {
            assert_eq!(user_id, "42");
            assert_eq!(company_id, "99");
        }
        other => panic!("expected UnresolvedCompany, got {other:?}"),
    }
}

#[test]
fn nameless_company_is_not_treated_as_unresolved() {
    let index = get_company_names(&[Company {
        id: "5".into(),
        name: None,
        address: None,
        postcode: None,
        frn: None,
    }]);
    let users = vec![user("1", "Bob", "Smith", "2020-01-01", 100.0, &[("5", 1.0)])];
    let opts = CsvOptions {
        unresolved: UnresolvedCompany::Fail,
        ..CsvOptions::default()
    };

    let csv = generate_holdings_csv_with(&users, &index, &opts).unwrap();

    assert_eq!(csv, "1,Bob,Smith,2020-01-01,,100");
}
