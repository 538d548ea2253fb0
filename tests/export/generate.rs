use holdings_export::{CompanyIndex, csv_lines, generate_holdings_csv, get_company_names};

use crate::common::{company, user};

#[test]
fn empty_input_gives_empty_string() {
    assert_eq!(generate_holdings_csv(&[], &CompanyIndex::default()), "");
}

#[test]
fn users_without_holdings_produce_no_lines() {
    let users = vec![user("1", "Bob", "Smith", "2020-01-01", 1000.0, &[])];
    assert_eq!(generate_holdings_csv(&users, &CompanyIndex::default()), "");
}

#[test]
fn single_holding_matches_known_line() {
    let companies = vec![company("1", "Company 1"), company("2", "Company 2")];
    let users = vec![user("1", "Bob", "Smith", "2020-01-01", 1000.0, &[("2", 1.0)])];

    let index = get_company_names(&companies);
    let csv = generate_holdings_csv(&users, &index);

    assert_eq!(csv, "1,Bob,Smith,2020-01-01,Company 2,1000");
}

#[test]
fn line_count_equals_total_holdings() {
    let index: CompanyIndex = [("a", "A"), ("b", "B"), ("c", "C")].into_iter().collect();
    let users = vec![
        user("1", "U", "One", "2021-01-01", 10.0, &[("a", 0.2), ("b", 0.3), ("c", 0.5)]),
        user("2", "U", "Two", "2021-01-02", 20.0, &[]),
        user("3", "U", "Three", "2021-01-03", 30.0, &[("a", 1.0)]),
    ];

    let csv = generate_holdings_csv(&users, &index);

    assert_eq!(csv.lines().count(), 4);
    assert!(!csv.ends_with('\n'));
    for line in csv.lines() {
        assert_eq!(line.split(',').count(), 6, "line {line:?}");
    }
}

#[test]
fn order_is_user_major_holding_minor() {
    let index: CompanyIndex = [("x", "X Corp"), ("y", "Y Corp"), ("z", "Z Corp")]
        .into_iter()
        .collect();
    let users = vec![
        user("b", "Second", "User", "2022-06-01", 100.0, &[("z", 0.1), ("x", 0.9)]),
        user("a", "First", "User", "2022-06-01", 100.0, &[("y", 0.5), ("z", 0.5)]),
    ];

    let order: Vec<(String, String)> = csv_lines(&users, &index)
        .map(|l| (l.user_id.to_string(), l.company_id.to_string()))
        .collect();

    assert_eq!(
        order,
        vec![
            ("b".to_string(), "z".to_string()),
            ("b".to_string(), "x".to_string()),
            ("a".to_string(), "y".to_string()),
            ("a".to_string(), "z".to_string()),
        ]
    );
}

#[test]
fn value_is_the_raw_float_product() {
    let index: CompanyIndex = [("1", "C1"), ("2", "C2")].into_iter().collect();
    let users = vec![user("7", "Ann", "Lee", "2023-03-03", 3.0, &[("1", 0.1), ("2", 0.9)])];

    let csv = generate_holdings_csv(&users, &index);

    assert_eq!(csv, "7,Ann,Lee,2023-03-03,C1,0.30000000000000004\n7,Ann,Lee,2023-03-03,C2,2.7");
}

#[test]
fn whole_values_have_no_fraction_and_zero_is_unsigned() {
    let index: CompanyIndex = [("1", "C1")].into_iter().collect();
    let users = vec![
        user("1", "A", "B", "2020-01-01", 2500.0, &[("1", 0.25)]),
        user("2", "C", "D", "2020-01-01", -100.0, &[("1", 0.0)]),
    ];

    let csv = generate_holdings_csv(&users, &index);

    assert_eq!(csv, "1,A,B,2020-01-01,C1,625\n2,C,D,2020-01-01,C1,0");
}

#[test]
fn unknown_company_leaves_empty_field() {
    let index: CompanyIndex = [("1", "Known")].into_iter().collect();
    let users = vec![user("1", "Bob", "Smith", "2020-01-01", 100.0, &[("1", 0.5), ("404", 0.5)])];

    let csv = generate_holdings_csv(&users, &index);

    assert_eq!(csv, "1,Bob,Smith,2020-01-01,Known,50\n1,Bob,Smith,2020-01-01,,50");
}

#[test]
fn fields_are_written_verbatim_by_default() {
    let index: CompanyIndex = [("1", "Smith, Jones & Co")].into_iter().collect();
    let users = vec![user("1", "Bob", "O\"Neil", "2020-01-01", 10.0, &[("1", 1.0)])];

    let csv = generate_holdings_csv(&users, &index);

    assert_eq!(csv, "1,Bob,O\"Neil,2020-01-01,Smith, Jones & Co,10");
}

#[test]
fn extreme_values_switch_to_exponent_notation() {
    let index: CompanyIndex = [("1", "C1")].into_iter().collect();
    let users = vec![
        user("1", "A", "B", "2020-01-01", 1e21, &[("1", 1.0)]),
        user("2", "C", "D", "2020-01-01", 1e20, &[("1", 1.0)]),
        user("3", "E", "F", "2020-01-01", 0.0001, &[("1", 0.001)]),
        user("4", "G", "H", "2020-01-01", 0.001, &[("1", 0.001)]),
        user("5", "I", "J", "2020-01-01", -123456789.0, &[("1", 1e15)]),
    ];

    let values: Vec<String> = generate_holdings_csv(&users, &index)
        .lines()
        .map(|l| l.rsplit(',').next().unwrap().to_string())
        .collect();

    assert_eq!(
        values,
        vec![
            "1e+21",
            "100000000000000000000",
            "1.0000000000000001e-7",
            "0.000001",
            "-1.23456789e+23",
        ]
    );
}

#[test]
fn non_finite_values_are_spelled_out() {
    let index: CompanyIndex = [("1", "C1")].into_iter().collect();
    let users = vec![
        user("1", "A", "B", "2020-01-01", f64::INFINITY, &[("1", 1.0)]),
        user("2", "C", "D", "2020-01-01", f64::INFINITY, &[("1", -1.0)]),
        user("3", "E", "F", "2020-01-01", f64::INFINITY, &[("1", 0.0)]),
    ];

    let csv = generate_holdings_csv(&users, &index);

    assert_eq!(
        csv,
        "1,A,B,2020-01-01,C1,Infinity\n2,C,D,2020-01-01,C1,-Infinity\n3,E,F,2020-01-01,C1,NaN"
    );
}
