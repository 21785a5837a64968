use std::cell::Cell;
use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

use ocrclean::config::{Config, OracleConfig};
use ocrclean::error::Error;
use ocrclean::io::reader::{count_chunks, count_lines};
use ocrclean::io::ChunkReader;
use ocrclean::oracle::{self, Correction, MessagesClient, Oracle};
use ocrclean::pipeline::{Confirm, CorrectionPipeline, Pipeline, RunOutcome, RunState};

struct AlwaysFails;
impl Oracle for AlwaysFails {
    fn correct(&self, _: &str) -> Result<Correction, oracle::Error> {
        Err(oracle::Error::Malformed("quota exceeded".to_string()))
    }
}

#[derive(Default)]
struct Upper {
    calls: Cell<usize>,
}
impl Oracle for Upper {
    fn correct(&self, text: &str) -> Result<Correction, oracle::Error> {
        self.calls.set(self.calls.get() + 1);
        Ok(Correction::new(text.to_uppercase(), None))
    }
}

struct Yes;
impl Confirm for Yes {
    fn confirm(&self, _: &str) -> Result<bool, Error> {
        Ok(true)
    }
}

fn gaius(nb_lines: usize) -> String {
    (0..nb_lines)
        .map(|x| format!("§ {} dupà càtre Bucurejti, in iure cessio\n", x + 1))
        .collect()
}

fn config(dir: &Path, content: &str, chunk_size: usize) -> Config {
    let input_path = dir.join("raw_gaius.txt");
    std::fs::write(&input_path, content).unwrap();
    Config {
        input_path,
        output_path: dir.join("gaius.txt"),
        chunk_size_lines: chunk_size,
        auto_start: true,
        inter_call_delay: Duration::ZERO,
    }
}

#[test]
fn chunks_rebuild_document() {
    let dir = tempfile::tempdir().unwrap();
    let content = gaius(23);
    let c = config(dir.path(), &content, 1);

    let nb_lines = count_lines(&c.input_path).unwrap();
    assert_eq!(nb_lines, 23);

    for chunk_size in [1, 5, 23, 100] {
        let total = count_chunks(nb_lines, chunk_size);
        let chunks: Vec<_> = ChunkReader::open(&c.input_path, chunk_size, total)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(chunks.len(), total);
        assert_eq!(chunks.iter().map(|chunk| chunk.text()).collect::<String>(), content);
    }
}

#[test]
fn always_failing_oracle_copies_input() {
    let dir = tempfile::tempdir().unwrap();
    // no trailing newline on the last line
    let content = gaius(7).trim_end().to_string();
    let c = config(dir.path(), &content, 3);
    let output = c.output_path.clone();

    let p = CorrectionPipeline::new(c, AlwaysFails, Yes);
    let outcome = p.run().unwrap();

    assert_eq!(outcome.state(), RunState::Completed);
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        format!("{}\n", content)
    );
    match outcome {
        RunOutcome::Completed(report) => {
            assert_eq!(report.lines_processed, 7);
            assert_eq!(report.fallback_chunks, vec![1, 2, 3]);
            assert_eq!(report.output_bytes, report.input_bytes + 1);
        }
        RunOutcome::Cancelled => unreachable!(),
    }
}

#[test]
fn uppercase_five_lines() {
    let dir = tempfile::tempdir().unwrap();
    let c = config(dir.path(), "l1\nl2\nl3\nl4\nl5\n", 2);
    let output = c.output_path.clone();

    let oracle = Upper::default();
    let p = CorrectionPipeline::new(c, &oracle, Yes);
    let outcome = p.run().unwrap();

    assert_eq!(oracle.calls.get(), 3);
    match outcome {
        RunOutcome::Completed(report) => assert_eq!(report.appends, 3),
        RunOutcome::Cancelled => unreachable!(),
    }
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        "L1\nL2\nL3\nL4\nL5\n"
    );
}

#[test]
fn unreachable_backend_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let content = gaius(4);
    let c = config(dir.path(), &content, 2);
    let output = c.output_path.clone();

    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut oc = OracleConfig::with_api_key("unused".to_string());
    oc.endpoint = format!("http://127.0.0.1:{}", port);
    oc.timeout = Duration::from_secs(5);
    let client = MessagesClient::new(oc).unwrap();

    let p = CorrectionPipeline::new(c, client, Yes);
    match p.run().unwrap() {
        RunOutcome::Completed(report) => assert_eq!(report.nb_fallbacks(), 2),
        RunOutcome::Cancelled => unreachable!(),
    }
    assert_eq!(std::fs::read_to_string(output).unwrap(), content);
}
