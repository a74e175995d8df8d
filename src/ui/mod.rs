use iced::{
    widget::{button, column, row, text, text_input, Space},
    Element, Length,
};

use crate::domain::{AppError, DownloadKind, DownloadOutcome, ResultRegion, Tone};

pub const URL_ACCEPTED: &str = "URL is valid. Choose an option below.";

/// Main view state
#[derive(Default)]
pub struct DownloadView {
    pub video_url: String,
    pub options_visible: bool,
    pub result: ResultRegion,
    pub save_status: String,
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    UrlChanged(String),
    SearchPressed,
    DownloadPressed(DownloadKind),
    LinkPressed { href: String, kind: DownloadKind },
}

impl DownloadView {
    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::UrlChanged(url) => {
                self.video_url = url;
            }
            DownloadMessage::SearchPressed => self.on_search(),
            DownloadMessage::DownloadPressed(_) | DownloadMessage::LinkPressed { .. } => {
                // Will be handled by the app
            }
        }
    }

    /// Reveals the options once something has been typed. Only emptiness is checked.
    pub fn on_search(&mut self) {
        if self.video_url.is_empty() {
            self.result = ResultRegion::danger(AppError::EmptyUrl.to_string());
            return;
        }

        self.options_visible = true;
        self.result = ResultRegion::success(URL_ACCEPTED);
    }

    /// Replaces the result region with the outcome of a download request.
    pub fn show_response(&mut self, kind: DownloadKind, response: Result<DownloadOutcome, AppError>) {
        self.result = match response {
            Ok(DownloadOutcome::Success { link }) => ResultRegion::link(link, kind),
            Ok(DownloadOutcome::Failure { message }) => {
                ResultRegion::danger(AppError::Server(message).to_string())
            }
            Err(e) => ResultRegion::danger(e.to_string()),
        };
    }

    pub fn view(&self) -> Element<'_, DownloadMessage> {
        let mut content = column![
            text("Video Downloader").size(32),
            Space::new().height(Length::Fixed(20.0)),
            text("Video URL:").size(16),
            row![
                text_input("Paste a video URL...", &self.video_url)
                    .on_input(DownloadMessage::UrlChanged)
                    .on_submit(DownloadMessage::SearchPressed)
                    .padding(10),
                button("Search")
                    .on_press(DownloadMessage::SearchPressed)
                    .padding([10, 20]),
            ]
            .spacing(10),
        ]
        .padding(20)
        .spacing(10);

        if self.options_visible {
            content = content.push(
                row![
                    button("Download Video")
                        .on_press(DownloadMessage::DownloadPressed(DownloadKind::Video))
                        .padding([10, 20]),
                    button("Download Audio")
                        .on_press(DownloadMessage::DownloadPressed(DownloadKind::Audio))
                        .padding([10, 20]),
                ]
                .spacing(10),
            );
        }

        content = content.push(Space::new().height(Length::Fixed(10.0)));
        content = content.push(self.result_view());

        if !self.save_status.is_empty() {
            content = content.push(text(&self.save_status).size(14));
        }

        content.into()
    }

    fn result_view(&self) -> Element<'_, DownloadMessage> {
        match &self.result {
            ResultRegion::Empty => Space::new().height(Length::Fixed(0.0)).into(),
            ResultRegion::Notice { tone, text: body } => {
                let style = match tone {
                    Tone::Success => text::success,
                    Tone::Danger => text::danger,
                };
                text(body).size(14).style(style).into()
            }
            ResultRegion::Link { href, kind, label } => button(text(label))
                .style(button::primary)
                .on_press(DownloadMessage::LinkPressed {
                    href: href.clone(),
                    kind: *kind,
                })
                .padding([10, 20])
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_with_empty_url() {
        let mut view = DownloadView::default();
        view.update(DownloadMessage::SearchPressed);

        assert!(!view.options_visible);
        assert_eq!(
            view.result,
            ResultRegion::danger("Please enter a TikTok video URL.")
        );
    }

    #[test]
    fn test_search_with_url() {
        let mut view = DownloadView::default();
        view.update(DownloadMessage::UrlChanged(
            "https://www.tiktok.com/@someone/video/1".to_string(),
        ));
        view.update(DownloadMessage::SearchPressed);

        assert!(view.options_visible);
        assert_eq!(view.result, ResultRegion::success(URL_ACCEPTED));
    }

    #[test]
    fn test_whitespace_counts_as_input() {
        let mut view = DownloadView::default();
        view.update(DownloadMessage::UrlChanged("  ".to_string()));
        view.on_search();
        assert!(view.options_visible);
    }

    #[test]
    fn test_clearing_url_keeps_options_open() {
        let mut view = DownloadView::default();
        view.update(DownloadMessage::UrlChanged("x".to_string()));
        view.on_search();
        view.update(DownloadMessage::UrlChanged(String::new()));
        view.on_search();

        assert!(view.options_visible);
        assert_eq!(view.result.text(), "Please enter a TikTok video URL.");
    }

    #[test]
    fn test_show_success_link() {
        let mut view = DownloadView::default();
        view.show_response(
            DownloadKind::Video,
            Ok(DownloadOutcome::Success {
                link: "http://x/file.mp4".to_string(),
            }),
        );

        match &view.result {
            ResultRegion::Link { href, kind, label } => {
                assert_eq!(href, "http://x/file.mp4");
                assert_eq!(*kind, DownloadKind::Video);
                assert!(label.contains("video"));
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_show_server_error() {
        let mut view = DownloadView::default();
        view.show_response(
            DownloadKind::Audio,
            Ok(DownloadOutcome::Failure {
                message: "invalid url".to_string(),
            }),
        );
        assert_eq!(view.result, ResultRegion::danger("Error: invalid url"));
    }

    #[test]
    fn test_show_transport_error() {
        for kind in [DownloadKind::Video, DownloadKind::Audio] {
            let mut view = DownloadView::default();
            view.show_response(kind, Err(AppError::Unavailable));
            assert_eq!(
                view.result,
                ResultRegion::danger("An error occurred. Please try again later.")
            );
        }
    }
}
