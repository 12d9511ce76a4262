//! Message formatting utilities for client display.

use chrono::Local;
use irori_server::infrastructure::dto::websocket::{ChatMessage, UserInfo};
use irori_shared::time::parse_rfc3339;

const RULE: &str = "============================================================";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a `users-update` roster, marking the current user
    pub fn format_roster(users: &[UserInfo], me: &str) -> String {
        let mut output = String::new();
        output.push_str("\n\n");
        output.push_str(RULE);
        output.push('\n');

        match users.first() {
            Some(first) => output.push_str(&format!("Room {}:\n", first.room)),
            None => output.push_str("(No users)\n"),
        }
        for user in users {
            let me_suffix = if user.name == me { " (me)" } else { "" };
            output.push_str(&format!("{}{}\n", user.name, me_suffix));
        }

        output.push_str(RULE);
        output.push('\n');
        output
    }

    pub fn format_user_joined(user: &str) -> String {
        format!("\n+ {} joined\n", user)
    }

    pub fn format_user_left(user: &str) -> String {
        format!("\n- {} left\n", user)
    }

    /// Format a chat line as `[hh:mm:ss] name: text` in local time
    ///
    /// A timestamp that does not parse is shown as `--:--:--`.
    pub fn format_chat_message(message: &ChatMessage, me: &str) -> String {
        let clock = parse_rfc3339(&message.timestamp)
            .map(|time| time.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());
        let me_suffix = if message.user == me { " (me)" } else { "" };
        format!(
            "\n[{}] {}{}: {}\n",
            clock, message.user, me_suffix, message.message
        )
    }

    pub fn format_raw_message(text: &str) -> String {
        format!("\nReceived: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, color: &str) -> UserInfo {
        UserInfo {
            id: format!("conn-{name}"),
            name: name.to_string(),
            color: color.to_string(),
            room: "ABCD".to_string(),
        }
    }

    fn chat(user: &str, timestamp: &str) -> ChatMessage {
        ChatMessage {
            id: "m-1".to_string(),
            user: user.to_string(),
            message: "Hello, world!".to_string(),
            timestamp: timestamp.to_string(),
            color: "bg-blue-500".to_string(),
        }
    }

    #[test]
    fn test_format_roster_marks_me() {
        // テスト項目: ロスターが全員を表示し、自分にだけマークが付く
        // given (前提条件):
        let users = vec![user("alice", "bg-blue-500"), user("bob", "bg-purple-500")];

        // when (操作):
        let result = MessageFormatter::format_roster(&users, "alice");

        // then (期待する結果):
        assert!(result.contains("Room ABCD:"));
        assert!(result.contains("alice (me)\n"));
        assert!(result.contains("bob\n"));
        assert!(!result.contains("bob (me)"));
    }

    #[test]
    fn test_format_empty_roster() {
        // テスト項目: 空のロスターはその旨を表示する
        // given (前提条件):
        let users: Vec<UserInfo> = vec![];

        // when (操作):
        let result = MessageFormatter::format_roster(&users, "alice");

        // then (期待する結果):
        assert!(result.contains("(No users)"));
    }

    #[test]
    fn test_format_user_notices() {
        // テスト項目: 参加・退出の通知行が正しくフォーマットされる
        // given (前提条件):
        let name = "bob";

        // when (操作):
        let joined = MessageFormatter::format_user_joined(name);
        let left = MessageFormatter::format_user_left(name);

        // then (期待する結果):
        assert_eq!(joined, "\n+ bob joined\n");
        assert_eq!(left, "\n- bob left\n");
    }

    #[test]
    fn test_format_chat_message() {
        // テスト項目: チャット行が [hh:mm:ss] name: text の形になる
        // given (前提条件):
        let message = chat("bob", "2023-01-01T00:00:00.000Z");

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message, "alice");

        // then (期待する結果):
        let line = result.trim();
        assert!(line.starts_with('['));
        assert_eq!(&line[3..4], ":");
        assert_eq!(&line[6..7], ":");
        assert!(line.ends_with("] bob: Hello, world!"));
    }

    #[test]
    fn test_format_own_chat_message() {
        // テスト項目: 自分のメッセージにはマークが付く
        // given (前提条件):
        let message = chat("alice", "2023-01-01T00:00:00.000Z");

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message, "alice");

        // then (期待する結果):
        assert!(result.contains("alice (me): Hello, world!"));
    }

    #[test]
    fn test_format_chat_message_with_bad_timestamp() {
        // テスト項目: 解析できないタイムスタンプはプレースホルダで表示される
        // given (前提条件):
        let message = chat("bob", "yesterday");

        // when (操作):
        let result = MessageFormatter::format_chat_message(&message, "alice");

        // then (期待する結果):
        assert!(result.contains("[--:--:--] bob: Hello, world!"));
    }
}
