//! The `report` subcommand: report the outcome of a process at a station.

use anyhow::Result;
use andon_api::{Client, PassResult, ReportRequest};
use clap::{Args, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResultArg {
    Pass,
    Fail,
}

impl From<ResultArg> for PassResult {
    fn from(value: ResultArg) -> Self {
        match value {
            ResultArg::Pass => PassResult::Pass,
            ResultArg::Fail => PassResult::Fail,
        }
    }
}

#[derive(Args)]
pub struct ReportArgs {
    /// Name of the line the station is on
    #[arg(long)]
    pub line: String,

    /// Name of the station
    #[arg(long)]
    pub station: String,

    /// Outcome of the process
    #[arg(long, value_enum)]
    pub result: ResultArg,

    /// Total time in seconds spent processing
    #[arg(long)]
    pub process_time: u64,

    /// If the process failed, the reason why
    #[arg(long)]
    pub fail_reason: Option<String>,

    /// If the process failed, additional details on why
    #[arg(long)]
    pub fail_notes: Option<String>,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl ReportArgs {
    pub fn to_request(&self) -> ReportRequest {
        let mut request = ReportRequest::new(
            &self.line,
            &self.station,
            PassResult::from(self.result),
            self.process_time,
        );
        if let Some(ref reason) = self.fail_reason {
            request = request.with_fail_reason(reason);
        }
        if let Some(ref notes) = self.fail_notes {
            request = request.with_fail_notes(notes);
        }
        request
    }
}

pub async fn run(args: &ReportArgs, client: &Client) -> Result<()> {
    let request = args.to_request();

    client.report_data(&request).await?;
    tracing::info!(
        "Reported {} for {} / {} ({}s)",
        request.pass_result,
        request.line_name.as_deref().unwrap_or_default(),
        request.station_name.as_deref().unwrap_or_default(),
        request.process_time_seconds
    );

    Ok(())
}
