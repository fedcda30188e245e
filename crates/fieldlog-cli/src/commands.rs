use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use fieldlog_core::models::participant::{IdSource, ParticipantId, RandomIds};
use fieldlog_session::controller::SurveyController;
use fieldlog_session::error::SessionError;
use fieldlog_session::session::{BASELINE, DAILY, Phase};
use fieldlog_session::view::{BiteOutcome, Dashboard};
use fieldlog_storage::file::FileStore;
use fieldlog_survey::{Questionnaire, get_questionnaire};

use crate::cli::Command;
use crate::config::{FieldlogConfig, default_config_path, load_config_from, save_config_to};
use crate::input::{describe_kind, parse_answers};

/// Where this invocation reads and writes, after flags are applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub data_dir: PathBuf,
    pub participant_id: ParticipantId,
}

impl Settings {
    /// Load the config, creating it with a fresh participant id on first
    /// run, then apply the command-line overrides.
    pub fn resolve(
        config_path: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        participant: Option<&str>,
        ids: &dyn IdSource,
    ) -> eyre::Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        let override_id = participant.map(ParticipantId::parse).transpose()?;

        let config = match load_config_from(&config_path)? {
            Some(config) => config,
            None => {
                let participant_id = match &override_id {
                    Some(id) => id.clone(),
                    None => ids.next_id()?,
                };
                let config = FieldlogConfig::new(participant_id, data_dir.clone());
                save_config_to(&config_path, &config)?;
                tracing::info!(participant = %config.participant_id, "participant id issued");
                config
            }
        };

        let data_dir = match data_dir {
            Some(dir) => dir,
            None => config.resolved_data_dir()?,
        };
        Ok(Self {
            config_path,
            data_dir,
            participant_id: override_id.unwrap_or(config.participant_id),
        })
    }
}

/// Run one subcommand and return what to print.
pub async fn run(settings: &Settings, command: Command) -> eyre::Result<String> {
    match command {
        Command::Questions {
            questionnaire,
            answers,
            json,
        } => questions(&questionnaire, &answers, json),
        Command::Whoami => Ok(format!(
            "participant: {}\ndata dir:    {}\nconfig:      {}\n",
            settings.participant_id,
            settings.data_dir.display(),
            settings.config_path.display()
        )),
        Command::Status => {
            let controller = open(settings).await?;
            Ok(status(&controller))
        }
        Command::History => {
            let controller = open(settings).await?;
            match controller.dashboard() {
                Some(dashboard) => Ok(history(&dashboard)),
                None => Err(eyre::eyre!("no baseline recorded yet")),
            }
        }
        Command::Baseline { answers } => {
            let mut controller = open(settings).await?;
            if controller.session().phase != Phase::BaselineCapture {
                return Err(eyre::eyre!(
                    "baseline already recorded; use `fieldlog amend` to change it"
                ));
            }
            fill(&mut controller, &BASELINE, &answers)?;
            match controller.submit_baseline().await {
                Ok(()) => Ok(notice_line(&controller)),
                Err(e) => Err(submission_failed(&controller, e)),
            }
        }
        Command::Entry { answers } => {
            let mut controller = open(settings).await?;
            if !controller.start_entry() {
                return Err(match controller.session().phase {
                    Phase::BaselineCapture => eyre::eyre!("record the baseline first"),
                    Phase::TrialComplete => {
                        eyre::eyre!("all 14 entries are logged; the trial is complete")
                    }
                    phase => eyre::eyre!("cannot start an entry in phase {phase:?}"),
                });
            }
            fill(&mut controller, &DAILY, &answers)?;
            match controller.submit_entry().await {
                Ok(()) => Ok(notice_line(&controller)),
                Err(e) => Err(submission_failed(&controller, e)),
            }
        }
        Command::Amend { answers } => {
            let mut controller = open(settings).await?;
            let draft = parse_answers(&BASELINE, &answers)?;
            match controller.amend_baseline(draft).await {
                Ok(()) => Ok(notice_line(&controller)),
                Err(e) => Err(submission_failed(&controller, e)),
            }
        }
    }
}

async fn open(settings: &Settings) -> eyre::Result<SurveyController> {
    let store = Arc::new(FileStore::new(settings.data_dir.clone()));
    let controller =
        SurveyController::start(store, &RandomIds, Some(settings.participant_id.clone())).await?;
    Ok(controller)
}

fn fill(
    controller: &mut SurveyController,
    questionnaire: &dyn Questionnaire,
    answers: &[String],
) -> eyre::Result<()> {
    let draft = parse_answers(questionnaire, answers)?;
    for (id, answer) in draft.iter() {
        if !controller.set_answer(id, answer.clone()) {
            return Err(eyre::eyre!("{id} is not part of the {} form", questionnaire.name()));
        }
    }
    Ok(())
}

fn submission_failed(controller: &SurveyController, error: SessionError) -> eyre::Report {
    if let SessionError::Validation(e) = &error {
        return eyre::eyre!("{}", e.message);
    }
    if matches!(error, SessionError::Persistence(_)) {
        let text = controller
            .session()
            .notice
            .as_ref()
            .map(|n| n.text.clone())
            .unwrap_or_else(|| "save failed".to_string());
        return eyre::Report::new(error).wrap_err(text);
    }
    error.into()
}

fn notice_line(controller: &SurveyController) -> String {
    match &controller.session().notice {
        Some(notice) => format!("{}\n", notice.text),
        None => String::new(),
    }
}

fn status(controller: &SurveyController) -> String {
    let session = controller.session();
    let mut out = String::new();
    let _ = writeln!(out, "participant: {}", session.participant_id);

    let Some(dashboard) = controller.dashboard() else {
        let _ = writeln!(out, "baseline not recorded yet");
        let _ = writeln!(out, "see `fieldlog questions baseline`");
        return out;
    };

    let _ = writeln!(
        out,
        "progress:    {}/{} entries ({}%)",
        dashboard.entries_logged, dashboard.trial_length, dashboard.progress_percent
    );
    match dashboard.next_day {
        Some(day) => {
            let _ = writeln!(out, "next:        day {day}");
        }
        None => {
            let _ = writeln!(out, "trial complete");
        }
    }
    if let Some(start) = dashboard.start_date {
        let _ = writeln!(out, "started:     {start}");
    }
    out
}

fn history(dashboard: &Dashboard) -> String {
    if dashboard.history.is_empty() {
        return "no entries yet\n".to_string();
    }
    let mut out = String::new();
    for row in &dashboard.history {
        let outcome = match row.outcome {
            BiteOutcome::Protected => "protected",
            BiteOutcome::Bitten => "bitten",
        };
        let _ = write!(
            out,
            "Day {:>2}  {}  {}  {outcome}",
            row.day,
            row.date.as_deref().unwrap_or("-"),
            row.time_applied.as_deref().unwrap_or("-"),
        );
        if let Some(notes) = &row.notes {
            let _ = write!(out, "  {notes}");
        }
        out.push('\n');
    }
    out
}

fn questions(id: &str, answers: &[String], json: bool) -> eyre::Result<String> {
    let questionnaire = get_questionnaire(id)?;
    let draft = parse_answers(questionnaire.as_ref(), answers)?;
    let active = questionnaire.active_questions(&draft);

    if json {
        return Ok(serde_json::to_string_pretty(&active)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", questionnaire.name());
    for question in active {
        let marker = if question.required { "*" } else { "" };
        let _ = writeln!(out, "\n{}{marker}: {}", question.id, question.label);
        let _ = writeln!(out, "    {}", describe_kind(&question.kind));
        if let Some(help) = &question.help {
            let _ = writeln!(out, "    {help}");
        }
    }
    Ok(out)
}
