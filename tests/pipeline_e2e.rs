// tests/pipeline_e2e.rs
use std::fs;
use std::path::{Path, PathBuf};

use gs_scrape::config::options::{AppOptions, ExportFormat};
use gs_scrape::runner::{self, RunRequest};
use gs_scrape::scrape::RecordsFile;
use gs_scrape::subject::SubjectArg;
use gs_scrape::Error;

const ROSTER: &str = "\
Ann Lee, http://cs/alee, http://gs/alee
Bob Ray, http://cs/bray, http://gs/bray
";

const GROUP: &str = "\
Web Lab, URL:http://lab, Keyword Exclusions:erratum
Ann Lee
B Ray
";

const RECORDS: &str = r#"{
  "people": [
    {
      "name": "Ann Lee",
      "by_year_url": "http://gs/alee&sortby=pubdate",
      "cited": [
        { "title": "Ann Big", "url": "http://gs/ann1", "year": 2001, "citations": 100, "venue": "SIGIR" },
        { "title": "Erratum to X", "url": "http://gs/ann2", "year": 2018, "citations": 90 },
        { "title": "Shared Work", "url": "http://gs/shared", "year": 2019, "citations": 40 }
      ],
      "recent": [
        { "title": "Ann New", "url": "http://gs/ann3", "year": 2020, "citations": 0 },
        { "title": "Shared Work", "url": "http://gs/shared", "year": 2019, "citations": 40 }
      ]
    },
    {
      "name": "Bob Ray",
      "cited": [
        { "title": "Bob Tool", "url": "http://gs/bob1", "year": 2015, "citations": 60 },
        { "title": "SHARED WORK", "url": "http://gs/shared", "year": 2019, "citations": 40,
          "authors": [
            { "name": "Ann Lee", "identity": { "name": "Ann Lee", "profile_url": "http://cs/alee", "source_url": "http://gs/alee" } },
            { "name": "C Other" }
          ] }
      ],
      "recent": [
        { "title": "Bob New", "url": "http://gs/bob2", "year": 2020, "citations": 1 },
        { "title": "SHARED WORK", "url": "http://gs/shared", "year": 2019, "citations": 40 }
      ]
    }
  ]
}"#;

struct Fixture {
    _tmp: tempfile::TempDir,
    dir: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_path_buf();
        fs::write(dir.join("faculty_info.txt"), ROSTER).unwrap();
        fs::write(dir.join("lab.txt"), GROUP).unwrap();
        fs::write(dir.join("records.json"), RECORDS).unwrap();
        Self { _tmp: tmp, dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn options(&self, format: ExportFormat) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.rank.max = 3;
        opts.rank.start_year = Some(2020);
        opts.export.format = format;
        opts.export.out_dir = self.path("out");
        opts
    }

    fn request(&self, subject: SubjectArg) -> RunRequest {
        RunRequest {
            subject,
            roster: self.path("faculty_info.txt"),
            records: Some(self.path("records.json")),
            save_records: None,
            write_report: true,
        }
    }
}

fn titles(papers: &[gs_scrape::model::Paper]) -> Vec<&str> {
    papers.iter().map(|p| p.title.as_str()).collect()
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn group_run_writes_html_report() {
    let fx = Fixture::new();
    let req = fx.request(SubjectArg::GroupFile(fx.path("lab.txt")));
    let outcome = runner::run(&fx.options(ExportFormat::Html), &req, None).unwrap();

    // Equal counts: Bob's copy comes later in group order and wins.
    assert_eq!(titles(&outcome.rankings.cited), ["Ann Big", "Bob Tool", "SHARED WORK"]);
    assert_eq!(titles(&outcome.rankings.recent), ["Ann New", "Bob New", "Shared Work"]);

    let path = outcome.report.unwrap();
    assert_eq!(path, fx.path("out").join("Web_Lab.html"));

    let html = read(&path);
    assert!(html.contains("<h2><a href=\"http://lab\">Web Lab</a></h2>"));
    assert!(html.contains("<h3>Most Cited Papers</h3>\n<h4>Citations Year Title</h4>"));
    assert!(html.contains("<p>100 2001 <a href=\"http://gs/ann1\">Ann Big</a><br>SIGIR<br></p>"));
    assert!(html.contains("<a href=\"http://cs/alee\">Ann Lee</a>, C Other</p>"));
    assert!(html.contains("<h3>Most Recent Papers</h3>\n<h4>Year Citations Title</h4>\n<p>2020 0 "));
    assert!(!html.contains("Erratum"));
}

#[test]
fn single_person_csv_and_saved_records() {
    let fx = Fixture::new();
    let mut opts = fx.options(ExportFormat::Csv);
    opts.rank.by_citations = false;

    let mut req = fx.request(SubjectArg::Name(s("bob ray")));
    req.save_records = Some(fx.path("saved/bob.json"));
    let outcome = runner::run(&opts, &req, None).unwrap();

    let csv = read(outcome.report.as_ref().unwrap());
    assert_eq!(
        csv,
        "List,Citations,Year,Title,Venue,Authors,URL\n\
         recent,1,2020,Bob New,,,http://gs/bob2\n\
         recent,40,2019,SHARED WORK,,,http://gs/shared\n"
    );

    let saved = RecordsFile::load(&fx.path("saved/bob.json")).unwrap();
    assert_eq!(saved.people.len(), 1);
    assert_eq!(saved.people[0].name, "Bob Ray");
    assert!(saved.people[0].cited.is_empty());
    assert_eq!(saved.people[0].recent.len(), 2);
}

#[test]
fn unknown_subject_aborts_the_run() {
    let fx = Fixture::new();
    let req = fx.request(SubjectArg::Name(s("Zed Nobody")));
    let err = runner::run(&fx.options(ExportFormat::Html), &req, None).unwrap_err();
    assert!(matches!(err, Error::UnknownMember { ref name, .. } if name == "Zed Nobody"));
    assert!(!fx.path("out").exists());
}

fn s(v: &str) -> String {
    v.to_string()
}
