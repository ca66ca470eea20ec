/// A blocking, user-visible alert.
pub trait Notifier {
    fn alert(&self, title: &str, message: &str);
}

/// Alerts on stderr, the terminal stand-in for a modal dialog.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }
}
