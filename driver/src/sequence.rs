//! The fixed five-step request sequence.

use std::io::Write;

use anyhow::Result;
use posts_core::{NewPost, Post, ResourceClient, Transport};
use serde_json::to_string_pretty;

const RULE: &str = "-----------";

fn banner(out: &mut impl Write, label: &str, first: bool) -> Result<()> {
    if !first {
        writeln!(out)?;
    }
    writeln!(out, "{RULE}\n{label}\n{RULE}")?;
    Ok(())
}

/// Runs fetch, create, replace, partial update and delete in that order,
/// writing each banner and result to `out`.
///
/// Every step completes before the next one starts. The first failure stops
/// the sequence and is returned. Results are written as pretty JSON; Delete
/// has no result and writes `()`.
pub fn run<T: Transport>(client: &ResourceClient<T>, out: &mut impl Write) -> Result<()> {
    banner(out, "GET REQUEST", true)?;
    let fetched = client.fetch_one()?;
    writeln!(out, "{}", to_string_pretty(&fetched)?)?;

    banner(out, "POST REQUEST", false)?;
    let post = client.create(&NewPost {
        title: "123".to_string(),
        body: "sdfsdfsd".to_string(),
        user_id: 4,
    })?;
    writeln!(out, "{}", to_string_pretty(&post)?)?;

    banner(out, "PUT REQUEST", false)?;
    let post = client.replace(&Post {
        id: 12,
        title: "123".to_string(),
        body: "sdfsdfsd".to_string(),
        user_id: 4,
    })?;
    writeln!(out, "{}", to_string_pretty(&post)?)?;

    banner(out, "PATCH REQUEST", false)?;
    let post = client.partial_update(35, "sjklfd;js")?;
    writeln!(out, "{}", to_string_pretty(&post)?)?;

    banner(out, "DELETE REQUEST", false)?;
    client.delete(43)?;
    writeln!(out, "()")?;

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use posts_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, PostClient};

    use super::*;

    #[derive(Default)]
    struct Recorder {
        sent: RefCell<Vec<HttpRequest>>,
        replies: RefCell<VecDeque<(u16, &'static str)>>,
    }

    impl Recorder {
        fn replying(replies: &[(u16, &'static str)]) -> Self {
            Self {
                sent: RefCell::default(),
                replies: RefCell::new(replies.iter().copied().collect()),
            }
        }
    }

    impl Transport for Recorder {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.sent.borrow_mut().push(request);
            let (status, body) = self
                .replies
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Transport("connection reset".to_string()))?;
            Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            })
        }
    }

    const ONE: &str = r#"{"id":1,"title":"t","body":"b","userId":1}"#;
    const CREATED: &str = r#"{"id":101,"title":"123","body":"sdfsdfsd","userId":4}"#;
    const REPLACED: &str = r#"{"id":12,"title":"123","body":"sdfsdfsd","userId":4}"#;
    const PATCHED: &str = r#"{"id":35,"title":"sjklfd;js","body":"b","userId":4}"#;

    fn client(recorder: Recorder) -> ResourceClient<Recorder> {
        ResourceClient::new(PostClient::new("http://api.test"), recorder)
    }

    #[test]
    fn runs_all_five_steps_in_order() {
        let client = client(Recorder::replying(&[
            (200, ONE),
            (201, CREATED),
            (200, REPLACED),
            (200, PATCHED),
            (200, "{}"),
        ]));
        let mut out = Vec::new();
        run(&client, &mut out).unwrap();

        let sent = client.transport().sent.borrow();
        let calls: Vec<_> = sent
            .iter()
            .map(|r| (r.method, r.path.as_str(), r.body.as_deref()))
            .collect();
        assert_eq!(
            calls,
            vec![
                (HttpMethod::Get, "http://api.test/posts", None),
                (
                    HttpMethod::Post,
                    "http://api.test/posts",
                    Some(r#"{"title":"123","body":"sdfsdfsd","userId":4}"#)
                ),
                (
                    HttpMethod::Put,
                    "http://api.test/posts/12",
                    Some(r#"{"id":12,"title":"123","body":"sdfsdfsd","userId":4}"#)
                ),
                (
                    HttpMethod::Patch,
                    "http://api.test/posts/35",
                    Some(r#"{"title":"sjklfd;js"}"#)
                ),
                (HttpMethod::Delete, "http://api.test/posts", Some(r#"{"id":43}"#)),
            ]
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("-----------\nGET REQUEST\n-----------\n{\n"));
        assert!(text.contains("\n\n-----------\nPOST REQUEST\n-----------\n"));
        assert!(text.contains("\"id\": 101"));
        assert!(text.contains("\"title\": \"sjklfd;js\""));
        assert!(text.ends_with("-----------\nDELETE REQUEST\n-----------\n()\n"));
    }

    #[test]
    fn first_failure_stops_the_sequence() {
        let client = client(Recorder::replying(&[(200, ONE), (500, "boom")]));
        let mut out = Vec::new();
        let err = run(&client, &mut out).unwrap_err();

        let api = err.downcast_ref::<ApiError>().unwrap();
        assert!(matches!(api, ApiError::HttpError { status: 500, .. }));
        assert_eq!(client.transport().sent.borrow().len(), 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("POST REQUEST"));
        assert!(!text.contains("PUT REQUEST"));
    }
}
