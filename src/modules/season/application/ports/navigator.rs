/// Port (interface) for leaving the seasons strip towards another route
/// Infrastructure layer implements this (router channel, webview bridge, test double...)
///
/// Requests are fire-and-forget: the view never learns whether the router
/// accepted the path, so implementations deal with their own failures.
pub trait Navigator: Send + Sync {
    /// Ask the host router to show `path`
    fn go_to(&self, path: &str);
}
