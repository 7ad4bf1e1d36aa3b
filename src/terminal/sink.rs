use super::format::{format_result, format_selection};
use crate::{
    presenter::RenderedResult,
    ui::{DisplaySurface, Notification, NotificationSink},
};

/// Draws onto stdout.
pub struct TerminalSurface;

impl DisplaySurface for TerminalSurface {
    fn show_selection(&self, symptoms: &[String]) {
        println!("{}", format_selection(symptoms));
    }

    fn show_result(&self, result: &RenderedResult) {
        println!("\n{}\n", format_result(result));
    }

    fn hide_result(&self) {
        println!("(results cleared)");
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            println!("Analyzing symptoms...");
        }
    }

    fn focus_result(&self) {}
}

/// Writes notifications to stderr. Printed lines cannot be withdrawn, so
/// `dismiss_after` has no effect here.
pub struct TerminalNotifier;

impl NotificationSink for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!(
            "{}: {}",
            notification.severity.as_str().to_uppercase(),
            notification.message
        );
    }
}
