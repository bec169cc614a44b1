// Which of the splash screen and the app stream are shown. The splash only
// exists for signed-in remote sessions; the stream waits for the scene.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub splash: bool,
    pub stream: bool,
}

#[inline]
pub fn visibility(loading: bool, logged_in: bool, remote: bool) -> Visibility {
    Visibility {
        splash: loading && logged_in && remote,
        stream: !loading,
    }
}
