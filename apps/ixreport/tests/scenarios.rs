//! End-to-end runs of the report pipeline with a stub validator.

use ixreport::catalog::Catalog;
use ixreport::error::{ReportError, Result};
use ixreport::pipeline;
use ixreport::validator::{ReplayValidator, Validator, ValidatorRun};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

struct StubValidator {
    log: String,
}

impl Validator for StubValidator {
    fn program(&self) -> &str {
        "stub"
    }

    fn validate(&self, _working: &Path, log: &Path) -> Result<ValidatorRun> {
        fs::write(log, &self.log).unwrap();
        Ok(ValidatorRun { status_note: None })
    }
}

const FILING: &str = "<html lang=\"en\">\n<head><title>Q3</title></head>\n<body>\n<div id=\"cover\">\n<ix:nonNumeric name=\"dei:DocumentType\">10-Q</ix:nonNumeric>\n<p>Revenue &amp; costs</p>\n<p>footer</p>\n</body>\n</html>\n";

struct Run {
    _dir: TempDir,
    report: PathBuf,
    outcome: ixreport::models::RunOutcome,
}

impl Run {
    fn html(&self) -> String {
        fs::read_to_string(&self.report).unwrap()
    }
}

fn log_of(entries: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<log>\n{}\n</log>\n",
        entries
    )
}

fn run_with(log: String) -> Run {
    let dir = tempdir().unwrap();
    let input = dir.path().join("filing.htm");
    fs::write(&input, FILING).unwrap();
    let report = dir.path().join("report.html");
    let outcome =
        pipeline::run(&input, &report, &StubValidator { log }, &Catalog::builtin()).unwrap();
    Run {
        _dir: dir,
        report,
        outcome,
    }
}

#[test]
fn scenario_a_known_code_with_context() {
    let run = run_with(log_of(
        r#"<entry code="html:syntaxError" level="warning">
  <message>Element ix:nonNumeric is not allowed here</message>
  <ref href="filing.htm" sourceLine="5"><property name="QName" value="foo:bar"/></ref>
</entry>"#,
    ));
    assert_eq!(run.outcome.diagnostics.len(), 1);
    let html = run.html();
    assert!(html.contains("<h3>html:syntaxError</h3>"));
    assert!(html.contains("HTML syntax error: input file does not follow the xHTML DTD"));
    assert!(html.contains("Offending element(s): foo:bar"));
    assert!(html.contains("4: </span>&lt;div id=&quot;cover&quot;&gt;"));
    assert!(html.contains(
        "5: </span>&lt;ix:nonNumeric name=&quot;dei:DocumentType&quot;&gt;10-Q&lt;/ix:nonNumeric&gt;"
    ));
    assert!(html.contains("6: </span>&lt;p&gt;Revenue &amp;amp; costs&lt;/p&gt;"));
}

#[test]
fn scenario_b_ignored_code_produces_nothing() {
    let run = run_with(log_of(
        r#"<entry code="EFM.5.02.05.graphicFileError" level="error">
  <message>graphic missing</message>
  <ref sourceLine="3"><property name="QName" value="img"/></ref>
</entry>"#,
    ));
    assert!(run.outcome.diagnostics.is_empty());
    let html = run.html();
    assert!(!html.contains("graphicFileError"));
    assert!(html.contains("No warnings or errors."));
}

#[test]
fn scenario_c_info_level_dropped() {
    let run = run_with(log_of(
        r#"<entry code="html:syntaxError" level="info">
  <message>loaded</message>
  <ref sourceLine="3"><property name="QName" value="body"/></ref>
</entry>"#,
    ));
    assert!(run.outcome.diagnostics.is_empty());
    assert!(!run.html().contains("<h3>"));
}

#[test]
fn scenario_d_two_refs_render_as_primary_and_continuation() {
    let run = run_with(log_of(
        r#"<entry code="EFM.5.02.05.anchorElementPosition" level="error">
  <message>Anchor outside root</message>
  <ref sourceLine="4"><property name="QName" value="a"/><property name="id" value="first"/></ref>
  <ref sourceLine="7"><property name="QName" value="a"/><property name="id" value="second"/></ref>
</entry>"#,
    ));
    let ds = &run.outcome.diagnostics;
    assert_eq!(ds.len(), 2);
    assert!(!ds[0].is_continuation);
    assert!(ds[1].is_continuation);
    assert_eq!(run.outcome.summary.errors, 1);
    assert_eq!(run.outcome.summary.continuations, 1);

    let html = run.html();
    assert_eq!(html.matches("<h3>").count(), 1);
    let first = html.find("id=first").unwrap();
    let subsequent = html.find("entry error subsequent").unwrap();
    let second = html.find("id=second").unwrap();
    assert!(first < subsequent && subsequent < second);
    assert!(html.contains("Anchor located outside of root elements"));
}

#[test]
fn scenario_e_line_past_end_of_document() {
    let lines = FILING.lines().count();
    let run = run_with(log_of(&format!(
        r#"<entry code="x" level="error"><message>m</message><ref sourceLine="{}"/></entry>
<entry code="y" level="error"><message>m</message><ref sourceLine="{}"/></entry>"#,
        lines,
        lines + 5
    )));
    let ds = &run.outcome.diagnostics;
    assert_eq!(ds[0].context_at, "</html>");
    assert_eq!(ds[0].context_after, "");
    assert_eq!(ds[1].context_at, "");
    assert_eq!(ds[1].context_after, "");
    assert!(run.html().contains("<h3>y</h3>"));
}

#[test]
fn duplicate_source_lines_get_identical_context() {
    let run = run_with(log_of(
        r#"<entry code="a" level="error"><message>m</message><ref sourceLine="6"/></entry>
<entry code="b" level="warning"><message>n</message><ref sourceLine="6"/><ref sourceLine="2"/></entry>"#,
    ));
    let ds = &run.outcome.diagnostics;
    assert_eq!(ds.len(), 3);
    for d in &ds[..2] {
        assert_eq!(d.context_before, "<ix:nonNumeric name=\"dei:DocumentType\">10-Q</ix:nonNumeric>");
        assert_eq!(d.context_at, "<p>Revenue &amp; costs</p>");
        assert_eq!(d.context_after, "<p>footer</p>");
    }
    assert_eq!(ds[2].context_before, "<html xmlns:dei=\"http://xbrl.sec.gov/dei/2018-01-31\" xmlns:rr=\"http://xbrl.sec.gov/rr/2018-01-31\" xmlns:utr=\"http://www.xbrl.org/2009/utr\" xmlns:link=\"http://www.xbrl.org/2003/linkbase\" xmlns:xbrli=\"http://www.xbrl.org/2003/instance\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" xmlns:xbrldi=\"http://xbrl.org/2006/xbrldi\" xmlns:iso4217=\"http://www.xbrl.org/2003/iso4217\" xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" xmlns:num=\"http://www.xbrl.org/dtr/type/numeric\" xmlns:nonnum=\"http://www.xbrl.org/dtr/type/non-numeric\" xmlns:xbrldt=\"http://xbrl.org/2005/xbrldt\" xmlns=\"http://www.w3.org/1999/xhtml\" xmlns:ix=\"http://www.xbrl.org/2013/inlineXBRL\" xmlns:ixt-sec=\"http://www.sec.gov/inlineXBRL/transformation/2015-08-31\" xmlns:ixt=\"http://www.xbrl.org/inlineXBRL/transformation/2015-02-26\" xmlns:pbf=\"http://www.pioneerinvestments.com/20200819\" lang=\"en\">");
    assert_eq!(ds[2].context_at, "<head><title>Q3</title></head>");
}

#[test]
fn diagnostic_count_matches_kept_line_bearing_refs() {
    let run = run_with(log_of(
        r#"<entry code="a" level="error"><message>m</message><ref sourceLine="1"/><ref/><ref sourceLine="2"/></entry>
<entry code="EFM.6.05.19" level="error"><message>m</message><ref sourceLine="1"/></entry>
<entry code="b" level="debug"><message>m</message><ref sourceLine="1"/></entry>
<entry code="c" level="warning"><message>m</message><ref/></entry>
<entry code="d" level="warning"><message>m</message><ref sourceLine="3"/><ref sourceLine="4"/><ref sourceLine="5"/></entry>"#,
    ));
    assert_eq!(run.outcome.diagnostics.len(), 5);
    let primaries = run
        .outcome
        .diagnostics
        .iter()
        .filter(|d| !d.is_continuation)
        .count();
    assert_eq!(primaries, 2);
}

#[test]
fn message_markup_never_reaches_report_unescaped() {
    let run = run_with(log_of(
        r#"<entry code="x&lt;y" level="error">
  <message>&lt;script&gt;alert("x")&lt;/script&gt;</message>
  <ref sourceLine="2"><property name="QName" value="&lt;b&gt;"/><property name="note" value="a&amp;b"/></ref>
</entry>"#,
    ));
    let html = run.html();
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
    assert!(html.contains("<h3>x&lt;y</h3>"));
    assert!(html.contains("Offending element(s): &lt;b&gt;; note=a&amp;b"));
}

#[test]
fn malformed_entry_is_skipped_not_fatal() {
    let run = run_with(log_of(
        r#"<entry level="error"><message>no code</message><ref sourceLine="2"/></entry>
<entry code="ok" level="error"><message>m</message><ref sourceLine="2"/></entry>"#,
    ));
    assert_eq!(run.outcome.diagnostics.len(), 1);
    assert_eq!(run.outcome.warnings.len(), 1);
    assert_eq!(run.outcome.warnings[0].entry, 1);
}

#[test]
fn unparsable_log_leaves_no_report() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("filing.htm");
    fs::write(&input, FILING).unwrap();
    let report = dir.path().join("report.html");
    let err = pipeline::run(
        &input,
        &report,
        &StubValidator {
            log: String::new(),
        },
        &Catalog::builtin(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::LogFormat { .. }));
    assert!(!report.exists());
}

#[test]
fn replayed_log_drives_the_same_pipeline() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("filing.htm");
    fs::write(&input, FILING).unwrap();
    let earlier = dir.path().join("earlier.xml");
    fs::write(
        &earlier,
        log_of(r#"<entry code="z" level="warning"><message>m</message><ref sourceLine="3"/></entry>"#),
    )
    .unwrap();
    let report = dir.path().join("report.html");
    let outcome = pipeline::run(
        &input,
        &report,
        &ReplayValidator { log: earlier },
        &Catalog::builtin(),
    )
    .unwrap();
    assert_eq!(outcome.diagnostics[0].context_at, "<body>");
    assert!(report.exists());
}
