use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

const FIXTURE: &str = "\
\"Data Source\",\"World Development Indicators\",\n\
\"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",\"1980\",\"1981\",\"1982\",\"1983\",\"1984\",\"1985\",\"1986\",\"1987\",\"1988\",\"1989\",\"1990\"\n\
\"Aruba\",\"ABW\",\"Urban population growth (annual %)\",\"SP.URB.GROW\",\"1\",\"1\",\"1\",\"1\",\"1\",\"1\",\"1\",\"1\",\"1\",\"1\",\"1\"\n\
\"Andorra\",\"AND\",\"Urban population growth (annual %)\",\"SP.URB.GROW\",\"4\",\"4\",\"4\",\"4\",\"4\",\"4\",\"4\",\"4\",\"4\",\"4\",\"4\"\n\
\"Aruba\",\"ABW\",\"CO2 emissions (kt)\",\"EN.ATM.CO2E.KT\",\"10\",\"90\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\"\n\
\"Andorra\",\"AND\",\"CO2 emissions (kt)\",\"EN.ATM.CO2E.KT\",\"10\",\"80\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\",\"20\"\n";

#[test]
fn missing_argument_prints_usage_and_fails() {
    let mut cmd = Command::cargo_bin("wdi-report").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_file_fails_with_context() {
    let mut cmd = Command::cargo_bin("wdi-report").unwrap();
    cmd.arg("definitely/not/here.csv");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not/here.csv"));
}

#[test]
fn reports_both_answers() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let mut cmd = Command::cargo_bin("wdi-report").unwrap();
    cmd.arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("was Andorra."))
        .stdout(predicate::str::contains("was 1981."));
}
