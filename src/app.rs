use crate::api::{ApiClient, ApiConfig};
use crate::application::{DownloadCoordinator, RequestSequencer};
use crate::config::Settings;
use crate::domain::{AppError, DownloadKind, DownloadOutcome, RequestToken};
use crate::ui::{DownloadMessage, DownloadView};
use iced::Task;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct DownloadApp {
    view: DownloadView,
    coordinator: DownloadCoordinator,
    sequencer: RequestSequencer,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl DownloadApp {
    pub fn new(settings: &Settings) -> Self {
        let api_client = ApiClient::new(ApiConfig {
            base_url: settings.backend_url.clone(),
        });

        Self {
            view: DownloadView::default(),
            coordinator: DownloadCoordinator::new(api_client),
            sequencer: RequestSequencer::new(settings.ignore_stale_responses),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    /// Backend answer for the request stamped with the token
    DownloadResolved {
        token: RequestToken,
        kind: DownloadKind,
        result: Result<DownloadOutcome, AppError>,
    },
    /// (Selected Path, Link to fetch)
    SavePathSelected(Option<PathBuf>, String),
    SaveCompleted(Result<PathBuf, AppError>),
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            match ui_msg {
                DownloadMessage::DownloadPressed(kind) => {
                    // Not re-validated: the URL may have been cleared after search
                    let video_url = app.view.video_url.clone();
                    let coordinator = app.coordinator.clone();
                    let token = app.sequencer.issue();

                    debug!(?token, %kind, "download requested");

                    return Task::perform(
                        async move { coordinator.request_download(video_url, kind).await },
                        move |result| Message::DownloadResolved {
                            token,
                            kind,
                            result,
                        },
                    );
                }
                DownloadMessage::LinkPressed { href, kind } => {
                    let coordinator = app.coordinator.clone();
                    let suggested = crate::utils::suggested_filename(&href, kind);
                    app.view.save_status = "Please select save location...".to_string();

                    return Task::perform(
                        async move {
                            let path = coordinator.choose_save_path(suggested).await;
                            (path, href)
                        },
                        |(path, href)| Message::SavePathSelected(path, href),
                    );
                }
                DownloadMessage::UrlChanged(_) | DownloadMessage::SearchPressed => {}
            }
        }
        Message::DownloadResolved {
            token,
            kind,
            result,
        } => {
            if app.sequencer.accepts(token) {
                app.view.show_response(kind, result);
                debug!(?token, result = app.view.result.text(), "result region updated");
            } else {
                debug!(?token, %kind, "dropping stale response");
            }
        }
        Message::SavePathSelected(path_opt, href) => match path_opt {
            Some(path) => {
                app.view.save_status = format!("Saving to: {}", path.display());
                let coordinator = app.coordinator.clone();

                return Task::perform(
                    async move { coordinator.save_link(href, path).await },
                    Message::SaveCompleted,
                );
            }
            None => {
                // User cancelled dialog
                app.view.save_status = "Save cancelled".to_string();
            }
        },
        Message::SaveCompleted(result) => match result {
            Ok(path) => {
                info!(path = %path.display(), "download saved");
                app.view.save_status = format!("Saved: {}", path.display());
            }
            Err(e) => {
                app.view.save_status = format!("Save failed: {}", e);
            }
        },
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}
