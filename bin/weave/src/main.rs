mod render;

use std::time::Duration;

use clap::Parser;
use fake_user_agent::get_chrome_rua;
use log::LevelFilter;
use reqwest::ClientBuilder;
use trackweave::{TrackweaveError, Url};
use trackweave_vimeo::{VimeoClient, VimeoError};

#[derive(Parser, Debug, Clone)]
#[clap(version, author)]
/// Grabs the highest definition quality streams off Vimeo HLS playlists.
pub struct WeaveArgs {
    /// Debug output
    #[clap(long, alias = "debug")]
    verbose: bool,

    /// Request timeout in seconds
    #[clap(long, default_value = "30", env = "TRACKWEAVE_TIMEOUT")]
    timeout: u64,

    /// User-Agent sent with every request. Defaults to a random Chrome UA.
    #[clap(long, env = "TRACKWEAVE_USER_AGENT")]
    user_agent: Option<String>,

    /// Print the result as JSON
    #[clap(long)]
    json: bool,

    /// Treat URL as an HLS master playlist and only correlate its streams
    #[clap(long)]
    manifest: bool,

    /// URL to the accessible Vimeo video
    url: String,
}

impl WeaveArgs {
    fn init_logger(&self) {
        let mut builder = pretty_env_logger::formatted_builder();
        if self.verbose {
            builder.filter_level(LevelFilter::Debug);
        } else if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        } else {
            builder.filter_level(LevelFilter::Info);
        }
        builder.init();
    }

    fn client(&self) -> anyhow::Result<VimeoClient> {
        let user_agent = match &self.user_agent {
            Some(user_agent) => user_agent.clone(),
            None => get_chrome_rua().to_string(),
        };
        let client = ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(self.timeout))
            .build()?;

        Ok(VimeoClient::new(client))
    }
}

/// Renders the requested output for `args`.
async fn execute(args: &WeaveArgs) -> anyhow::Result<String> {
    let client = args.client()?;

    if args.manifest {
        let manifest_url = Url::parse(&args.url)?;
        let report = client
            .analyze_manifest(&manifest_url)
            .await?
            .correlate()?;
        if args.json {
            Ok(format!("{}\n", serde_json::to_string_pretty(&report)?))
        } else {
            render::render_report(&report)
        }
    } else {
        let selection = client.analyze(&args.url).await?;
        if args.json {
            Ok(format!("{}\n", serde_json::to_string_pretty(&selection)?))
        } else {
            render::render_selection(&selection)
        }
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(error) = error.downcast_ref::<VimeoError>() {
        error.exit_code()
    } else if let Some(error) = error.downcast_ref::<TrackweaveError>() {
        error.exit_code()
    } else {
        10
    }
}

#[tokio::main]
async fn main() {
    let args = WeaveArgs::parse();
    args.init_logger();

    match execute(&args).await {
        Ok(output) => print!("{output}"),
        Err(error) => {
            log::error!("{error}");
            std::process::exit(exit_code(&error));
        }
    }
}
