//! 通知（スナックバー）の状態管理
//!
//! 表示から一定時間で自動的に閉じる。クリックアウェイでは閉じない。

use serde::{Deserialize, Serialize};

/// 自動で閉じるまでの時間（ミリ秒）
pub const AUTO_HIDE_MS: u32 = 6000;

/// 通知の重要度
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

/// 通知を閉じる理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// 通知の外側をクリック（無視される）
    ClickAway,
    /// 閉じるボタン
    CloseButton,
    Timeout,
}

/// 自動クローズ用のチケット。発行時の通知にだけ効く。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

/// 通知の状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    generation: u64,
}

impl NotificationState {
    /// 通知を表示する。戻り値のチケットで自動クローズを予約する。
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> HideTicket {
        self.visible = true;
        self.message = message.into();
        self.severity = severity;
        self.generation += 1;
        log::debug!("notification shown ({}): {}", severity.as_str(), self.message);
        HideTicket(self.generation)
    }

    /// 閉じる。閉じた場合はtrue。
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if reason == DismissReason::ClickAway || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// タイムアウト到達。後から別の通知が出ていれば何もしない。
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.dismiss(DismissReason::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_sets_state() {
        let mut n = NotificationState::default();
        n.notify("保存しました", Severity::Success);
        assert!(n.visible);
        assert_eq!(n.message, "保存しました");
        assert_eq!(n.severity, Severity::Success);
    }

    #[test]
    fn test_clickaway_is_ignored() {
        let mut n = NotificationState::default();
        n.notify("x", Severity::Info);
        assert!(!n.dismiss(DismissReason::ClickAway));
        assert!(n.visible);
    }

    #[test]
    fn test_other_reasons_close() {
        for reason in [DismissReason::CloseButton, DismissReason::Timeout] {
            let mut n = NotificationState::default();
            n.notify("x", Severity::Warning);
            assert!(n.dismiss(reason));
            assert!(!n.visible);
        }
    }

    #[test]
    fn test_auto_hide_is_six_seconds() {
        assert_eq!(AUTO_HIDE_MS, 6000);
    }

    #[test]
    fn test_timeout_closes() {
        let mut n = NotificationState::default();
        let ticket = n.notify("x", Severity::Error);
        assert!(n.expire(ticket));
        assert!(!n.visible);
    }

    #[test]
    fn test_stale_ticket_does_not_close_newer_notification() {
        let mut n = NotificationState::default();
        let first = n.notify("first", Severity::Info);
        let second = n.notify("second", Severity::Info);
        assert!(!n.expire(first));
        assert!(n.visible);
        assert_eq!(n.message, "second");
        assert!(n.expire(second));
        assert!(!n.visible);
    }
}
