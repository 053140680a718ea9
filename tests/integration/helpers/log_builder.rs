//! Builders for UMI-tools extract logs shaped like the ones the tool writes.

use std::fs;
use std::path::{Path, PathBuf};

/// Builds the text of an extract log.
#[derive(Debug, Clone, Default)]
pub struct ExtractLogBuilder {
    input_name: Option<String>,
    input_reads: Option<u64>,
    output_reads: Option<u64>,
    filtered_reads: Option<u64>,
    with_marker: bool,
}

impl ExtractLogBuilder {
    /// A log with the marker line and no counters.
    pub fn new() -> Self {
        Self { with_marker: true, ..Default::default() }
    }

    /// Records `name` as the file the tool read from stdin.
    pub fn input_name(mut self, name: &str) -> Self {
        self.input_name = Some(name.to_string());
        self
    }

    pub fn input_reads(mut self, n: u64) -> Self {
        self.input_reads = Some(n);
        self
    }

    pub fn output_reads(mut self, n: u64) -> Self {
        self.output_reads = Some(n);
        self
    }

    pub fn filtered_reads(mut self, n: u64) -> Self {
        self.filtered_reads = Some(n);
        self
    }

    /// Drops the marker line, producing a log of some other tool.
    pub fn without_marker(mut self) -> Self {
        self.with_marker = false;
        self
    }

    pub fn build(&self) -> String {
        let mut log = String::from("# UMI-tools version: 1.1.2\n");
        if self.with_marker {
            log.push_str("# output generated by extract --extract-method=string --bc-pattern=NNNNNNNNNN\n");
        } else {
            log.push_str("# output generated by dedup --stdin=in.bam\n");
        }
        log.push_str("# job started at Tue Mar  2 10:01:02 2021 on node01 -- 4a1e\n");
        if let Some(name) = &self.input_name {
            log.push_str(&format!(
                "# stdin                                   : <_io.TextIOWrapper name='{name}' mode='r' encoding='UTF-8'>\n"
            ));
        }
        log.push_str("# stdout                                  : <_io.TextIOWrapper name='<stdout>' mode='w' encoding='UTF-8'>\n");
        if let Some(n) = self.input_reads {
            log.push_str(&format!("2021-03-02 10:05:00,000 INFO Input Reads: {n}\n"));
        }
        if let Some(n) = self.filtered_reads {
            log.push_str(&format!("2021-03-02 10:05:00,000 INFO Filtered cell barcode: {n}\n"));
        }
        if let Some(n) = self.output_reads {
            log.push_str(&format!("2021-03-02 10:05:00,000 INFO Reads output: {n}\n"));
        }
        log.push_str("# job finished in 238 seconds at Tue Mar  2 10:05:00 2021 --  3.52  0.11  0.00  0.00 -- 4a1e\n");
        log
    }

    /// Writes the log to `dir/name`, creating parent directories.
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, self.build()).unwrap();
        path
    }
}
