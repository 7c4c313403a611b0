//! [`Terminal`] implementation of the UI collaborators.

use std::{cell::Cell, convert::Infallible, io::Write as _};

use service::ui::{Confirm, Navigate, Notify, Screen, Ui};
use tokio::{
    io::{self, AsyncBufRead, AsyncBufReadExt as _, BufReader, Lines, Stdin},
    sync::Mutex,
};

/// Terminal reading user input line by line.
#[derive(Debug)]
pub struct Terminal<R = BufReader<Stdin>> {
    /// Lines of the user input.
    input: Mutex<Lines<R>>,

    /// [`Screen`] the UI was redirected to last.
    redirect: Cell<Option<Screen>>,
}

impl Terminal {
    /// Creates a new [`Terminal`] reading the standard input.
    #[must_use]
    pub fn new() -> Self {
        Self::with_input(BufReader::new(io::stdin()))
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin> Terminal<R> {
    /// Creates a new [`Terminal`] reading the provided `input`.
    #[must_use]
    pub fn with_input(input: R) -> Self {
        Self {
            input: Mutex::new(input.lines()),
            redirect: Cell::new(None),
        }
    }

    /// Reads the next line of the user input.
    ///
    /// [`None`] is returned once the input is exhausted or unreadable.
    pub async fn read_line(&self) -> Option<String> {
        self.input
            .lock()
            .await
            .next_line()
            .await
            .unwrap_or_else(|e| {
                tracing::error!("failed to read input: {e}");
                None
            })
    }

    /// Asks for the `label`ed value, showing its `current` one.
    pub async fn prompt(&self, label: &str, current: &str) -> Option<String> {
        if current.is_empty() {
            print!("{label}: ");
        } else {
            print!("{label} [{current}]: ");
        }
        _ = std::io::stdout().flush();

        self.read_line().await.map(|line| line.trim().to_owned())
    }

    /// Takes the [`Screen`] the UI was redirected to, if any.
    pub fn take_redirect(&self) -> Option<Screen> {
        self.redirect.take()
    }
}

impl<R> Ui<Notify> for Terminal<R> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Notify(notification): Notify,
    ) -> Result<Self::Ok, Self::Err> {
        println!("{notification}");
        Ok(())
    }
}

impl<R: AsyncBufRead + Unpin> Ui<Confirm> for Terminal<R> {
    type Ok = bool;
    type Err = Infallible;

    async fn execute(
        &self,
        Confirm(confirmation): Confirm,
    ) -> Result<Self::Ok, Self::Err> {
        println!("{}\n{}", confirmation.title, confirmation.message);
        let label = format!(
            "[y] {} / [N] {}",
            confirmation.confirm_text, confirmation.cancel_text,
        );

        let answer = self.prompt(&label, "").await.unwrap_or_default();
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

impl<R> Ui<Navigate> for Terminal<R> {
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Navigate(redirect): Navigate,
    ) -> Result<Self::Ok, Self::Err> {
        tracing::debug!(
            to = %redirect.to,
            "redirecting in {:?}",
            redirect.after,
        );
        tokio::time::sleep(redirect.after).await;
        self.redirect.set(Some(redirect.to));
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use service::ui::{
        Confirm, Confirmation, Navigate, Redirect, Screen, Ui as _,
    };

    use super::Terminal;

    async fn confirm(input: &'static [u8]) -> bool {
        Terminal::with_input(input)
            .execute(Confirm(Confirmation::delete("user")))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn confirms_only_explicitly() {
        assert!(confirm(b"y\n").await);
        assert!(confirm(b" YES \n").await);
        assert!(!confirm(b"\n").await);
        assert!(!confirm(b"no\n").await);
        assert!(!confirm(b"").await);
    }

    #[tokio::test]
    async fn reads_lines_until_exhausted() {
        let terminal = Terminal::with_input(&b"first\n second \n"[..]);

        assert_eq!(terminal.read_line().await.as_deref(), Some("first"));
        assert_eq!(
            terminal.prompt("Name", "").await.as_deref(),
            Some("second"),
        );
        assert_eq!(terminal.read_line().await, None);
    }

    #[tokio::test]
    async fn remembers_redirect() {
        let terminal = Terminal::with_input(&b""[..]);
        assert_eq!(terminal.take_redirect(), None);

        terminal
            .execute(Navigate(Redirect {
                to: Screen::Users,
                after: Duration::ZERO,
            }))
            .await
            .unwrap();

        assert_eq!(terminal.take_redirect(), Some(Screen::Users));
        assert_eq!(terminal.take_redirect(), None);
    }
}
