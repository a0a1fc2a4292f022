//! The `update-status` subcommand: change the status color of a station.

use anyhow::Result;
use andon_api::{Client, StatusColor, StatusUpdateRequest};
use clap::{Args, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Green,
    Yellow,
    Red,
}

impl From<ColorArg> for StatusColor {
    fn from(value: ColorArg) -> Self {
        match value {
            ColorArg::Green => StatusColor::Green,
            ColorArg::Yellow => StatusColor::Yellow,
            ColorArg::Red => StatusColor::Red,
        }
    }
}

#[derive(Args)]
pub struct UpdateStatusArgs {
    /// Name of the line the station is on
    #[arg(long)]
    pub line: String,

    /// Name of the station
    #[arg(long)]
    pub station: String,

    /// Color to change the station to
    #[arg(long, value_enum)]
    pub color: ColorArg,

    /// Reason for the color change
    #[arg(long)]
    pub reason: Option<String>,

    /// Notes on the change
    #[arg(long)]
    pub notes: Option<String>,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateStatusArgs {
    pub fn to_request(&self) -> StatusUpdateRequest {
        let mut request =
            StatusUpdateRequest::new(&self.line, &self.station, StatusColor::from(self.color));
        if let Some(ref reason) = self.reason {
            request = request.with_status_reason(reason);
        }
        if let Some(ref notes) = self.notes {
            request = request.with_status_notes(notes);
        }
        request
    }
}

pub async fn run(args: &UpdateStatusArgs, client: &Client) -> Result<()> {
    let request = args.to_request();

    client.update_station_status(&request).await?;
    tracing::info!(
        "Set {} / {} to {}",
        request.line_name.as_deref().unwrap_or_default(),
        request.station_name.as_deref().unwrap_or_default(),
        request.status_color
    );

    Ok(())
}
