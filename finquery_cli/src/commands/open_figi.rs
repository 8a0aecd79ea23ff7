use anyhow::Result;
use clap::Subcommand;
use finquery_lib::open_figi::{MappingJob, OpenFigiClient};
use finquery_lib::Config;

use crate::output;

#[derive(Subcommand)]
pub enum OpenFigiCommand {
    /// Free-text search for securities
    Search { query: String },
    /// Map a third-party identifier to FIGIs
    Map {
        /// Identifier type, e.g. ID_BB_GLOBAL or ID_ISIN
        id_type: String,
        id_value: String,
        /// Restrict to one exchange code, e.g. US
        #[arg(long)]
        exch_code: Option<String>,
        /// Restrict to one market identifier code
        #[arg(long)]
        mic_code: Option<String>,
        /// Restrict to one currency, e.g. USD
        #[arg(long)]
        currency: Option<String>,
    },
    /// List the allowed values for a mapping field, e.g. marketSecDes
    Values { field: String },
}

pub async fn run(command: &OpenFigiCommand, config: &Config) -> Result<()> {
    let client = OpenFigiClient::new(config.openfigi_key().map(str::to_string))?;

    let data = match command {
        OpenFigiCommand::Search { query } => client.search(query).await?,
        OpenFigiCommand::Map {
            id_type,
            id_value,
            exch_code,
            mic_code,
            currency,
        } => {
            let mut job = MappingJob::new(id_type, id_value);
            if let Some(exch_code) = exch_code {
                job = job.with_exch_code(exch_code);
            }
            if let Some(mic_code) = mic_code {
                job = job.with_mic_code(mic_code);
            }
            if let Some(currency) = currency {
                job = job.with_currency(currency);
            }
            client.mapping(&[job]).await?
        }
        OpenFigiCommand::Values { field } => client.mapping_values(field).await?,
    };

    output::print_json(&data)
}
