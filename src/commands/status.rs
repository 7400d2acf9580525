use crate::OutputFormat;
use crate::artifacts::presentation::file_status::FileStatus;
use crate::commands::viewer::Viewer;
use serde::Serialize;

#[derive(Serialize)]
struct StatusRow<'c> {
    code: &'c str,
    label: String,
    color: &'static str,
}

impl Viewer {
    /// Label each two-character porcelain status code
    pub fn status(&self, codes: &[String]) -> anyhow::Result<()> {
        let statuses = codes
            .iter()
            .map(|code| FileStatus::try_parse(code).map(|status| (code.as_str(), status)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        match self.format() {
            OutputFormat::Json => {
                let rows = statuses
                    .iter()
                    .map(|(code, status)| StatusRow {
                        code: *code,
                        label: status.label().to_string(),
                        color: status.color(),
                    })
                    .collect::<Vec<_>>();
                self.write_json(&rows)
            }
            OutputFormat::Text => {
                for (code, status) in &statuses {
                    writeln!(
                        self.writer(),
                        "{}\t{}",
                        code,
                        status.colorize(status.label())
                    )?;
                }
                Ok(())
            }
        }
    }
}
