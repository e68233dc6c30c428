//! Integration tests for the report writer lifecycle.

use lintreport::formatter::{CheckstyleFormatter, PlainFormatter, ResultFormatter, XmlFormatter};
use lintreport::writer::{FileReportWriter, MultiReportWriter, ReportWriter};
use lintreport::{Issue, LintResult, ReportError};
use std::fs;
use tempfile::TempDir;

fn sample_results() -> Vec<LintResult> {
    vec![
        LintResult::new("src/a.js").with_issue(
            Issue::new("src/a.js", 1, 5, "Missing 'use strict' statement.")
                .with_evidence("var a = 1;"),
        ),
        LintResult::new("src/b.js"),
        LintResult::new("src/c.js")
            .with_issue(Issue::new("src/c.js", 10, 3, "Unexpected '++'."))
            .with_issue(Issue::new("src/c.js", 12, 1, "Missing semicolon.")),
    ]
}

#[test]
fn report_is_header_then_results_then_footer() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reports").join("jslint.xml");
    let results = sample_results();

    let mut writer = FileReportWriter::new(&path, &XmlFormatter);
    writer.open().unwrap();
    for result in &results {
        writer.report(result).unwrap();
    }
    writer.close().unwrap();

    let mut expected = XmlFormatter.header().unwrap();
    for result in &results {
        expected.push_str(&XmlFormatter.format(result));
    }
    expected.push_str(&XmlFormatter.footer().unwrap());

    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn plain_report_has_no_header_or_footer() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("report.txt");

    FileReportWriter::new(&path, &PlainFormatter)
        .write_results(&sample_results())
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "src/a.js:1:5:Missing 'use strict' statement.\n\
         var a = 1;\n    ^\n\
         src/c.js:10:3:Unexpected '++'.\n\
         src/c.js:12:1:Missing semicolon.\n"
    );
}

#[test]
fn unclosed_report_has_no_footer() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("checkstyle.xml");

    let mut writer = FileReportWriter::new(&path, &CheckstyleFormatter);
    writer.open().unwrap();
    writer.report(&sample_results()[0]).unwrap();
    drop(writer);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("<checkstyle>"));
    assert!(!contents.contains("</checkstyle>"));
}

#[test]
fn failed_open_is_reported_and_close_still_succeeds() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    fs::write(&blocker, "").unwrap();

    let mut writer = FileReportWriter::new(blocker.join("report.txt"), &PlainFormatter);
    let err = writer.write_results(&sample_results()).unwrap_err();

    assert!(matches!(err, ReportError::CreateDir { .. }));
    assert!(!writer.is_open());
}

#[test]
fn multi_writer_writes_every_report() {
    let temp = TempDir::new().unwrap();
    let xml = temp.path().join("jslint.xml");
    let txt = temp.path().join("report.txt");

    let mut multi = MultiReportWriter::new()
        .with_writer(FileReportWriter::new(&xml, &XmlFormatter))
        .with_writer(FileReportWriter::new(&txt, &PlainFormatter));
    multi.write_results(&sample_results()).unwrap();

    let xml = fs::read_to_string(&xml).unwrap();
    assert!(xml.ends_with("</jslint>\n"));
    assert_eq!(xml.matches("<file ").count(), 3);

    let txt = fs::read_to_string(&txt).unwrap();
    assert_eq!(txt.lines().count(), 5);
}

#[test]
fn borrowed_custom_formatter() {
    struct Counting {
        prefix: String,
    }

    impl ResultFormatter for Counting {
        fn header(&self) -> Option<String> {
            Some(format!("{} start\n", self.prefix))
        }

        fn footer(&self) -> Option<String> {
            Some(format!("{} end\n", self.prefix))
        }

        fn format(&self, result: &LintResult) -> String {
            format!("{} {} {}\n", self.prefix, result.name, result.issues.len())
        }
    }

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("count.txt");
    let formatter = Counting {
        prefix: "#".to_string(),
    };

    FileReportWriter::new(&path, &formatter)
        .write_results(&sample_results())
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "# start\n# src/a.js 1\n# src/b.js 0\n# src/c.js 2\n# end\n"
    );
}
