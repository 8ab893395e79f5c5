use clap::{value_parser, Arg, ArgAction, Command};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use resume_scorer_client::{
    ClientConfig, ResumeFile, ResumeScorerClient, SubmissionHandler, SubmissionInput,
    TerminalSurface,
};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let matches = Command::new("resume-scorer")
        .about("Score a resume against a job description")
        .arg(
            Arg::new("resume_path")
                .value_parser(value_parser!(PathBuf))
                .required(false),
        )
        .arg(
            Arg::new("job-description")
                .long("job-description")
                .conflicts_with("job-description-file"),
        )
        .arg(
            Arg::new("job-description-file")
                .long("job-description-file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("extra-prompt")
                .long("extra-prompt")
                .default_value(""),
        )
        .arg(
            Arg::new("server-addr")
                .long("server-addr")
                .required(false)
                .value_parser(value_parser!(url::Url)),
        )
        .arg(Arg::new("endpoint-path").long("endpoint-path").required(false))
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the full analysis as JSON instead of rendering scores"),
        )
        .get_matches();

    let mut config = ClientConfig::from_env()?;
    if let Some(server_addr) = matches.get_one::<url::Url>("server-addr") {
        config.server_addr = server_addr.clone();
    }
    if let Some(endpoint_path) = matches.get_one::<String>("endpoint-path") {
        config.endpoint_path = endpoint_path.clone();
    }
    let client = ResumeScorerClient::from_config(&config)?;

    let resume = match matches.get_one::<PathBuf>("resume_path") {
        Some(path) => Some(ResumeFile::from_path(path).await?),
        None => None,
    };
    let job_description = match matches.get_one::<PathBuf>("job-description-file") {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => matches
            .get_one::<String>("job-description")
            .cloned()
            .unwrap_or_default(),
    };
    let extra_prompt = matches
        .get_one::<String>("extra-prompt")
        .expect("extra-prompt has a default value");

    let input = SubmissionInput::new(resume, job_description, extra_prompt.clone());

    if matches.get_flag("json") {
        return match client.score_resume(input).await {
            Ok(result) => {
                serde_json::to_writer_pretty(io::stdout(), &result)?;
                println!();
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let handler = SubmissionHandler::new(client);
    let mut surface = TerminalSurface::stdout();
    if handler.submit(input, &mut surface).await.is_scored() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
