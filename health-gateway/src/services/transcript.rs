//! HTML rendering of chat transcripts for email delivery.

use askama::Template;

use crate::models::ChatMessage;

pub const TRANSCRIPT_SUBJECT: &str = "Your Odisha Healthcare AI Chat Transcript";

/// Role labels and content are HTML-escaped by the template engine.
#[derive(Template)]
#[template(path = "transcript.html")]
struct TranscriptTemplate<'a> {
    messages: &'a [ChatMessage],
}

pub fn render_transcript(messages: &[ChatMessage]) -> Result<String, askama::Error> {
    TranscriptTemplate { messages }.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn renders_one_styled_fragment_per_message_in_order() {
        let html = render_transcript(&[
            ChatMessage::new(Role::User, "Hi"),
            ChatMessage::new(Role::Assistant, "Hello"),
        ])
        .unwrap();

        assert_eq!(html.matches("<b style=\"color:").count(), 2);

        let user = html
            .find(r##"<p><b style="color:#22C55E">USER:</b> Hi</p>"##)
            .expect("user fragment");
        let assistant = html
            .find(r##"<p><b style="color:#F97316">ASSISTANT:</b> Hello</p>"##)
            .expect("assistant fragment");
        assert!(user < assistant);
        assert!(html.contains("</p><p>"), "fragments are not separated");
    }

    #[test]
    fn wraps_fragments_in_heading_and_footer() {
        let html = render_transcript(&[]).unwrap();

        assert!(html.contains("<h2>🧾 Odisha Healthcare AI Chat Transcript</h2>"));
        assert!(html.contains("Sent by Odisha Healthcare AI Bot"));
        assert_eq!(html.matches("<b style=").count(), 0);
    }

    #[test]
    fn message_content_is_escaped() {
        let html = render_transcript(&[ChatMessage::new(
            Role::User,
            "<script>alert(1)</script>",
        )])
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn unknown_roles_use_the_assistant_color() {
        let html =
            render_transcript(&[ChatMessage::new(Role::Other("doctor".into()), "Rest")]).unwrap();
        assert!(html.contains(r##"<b style="color:#F97316">DOCTOR:</b> Rest"##));
    }
}
