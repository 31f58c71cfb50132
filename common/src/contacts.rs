//! 連絡先一覧の編集状態
//!
//! 一覧の行データ生成と、編集ダイアログ・削除確認ダイアログ・通知の状態を持つ。
//! 元の連絡先データは読み取りのみで、変更は編集バッファにだけ反映される。

use crate::error::Result;
use crate::notification::{DismissReason, HideTicket, NotificationState, Severity};
use crate::types::{ContactRecord, RecordId};
use std::str::FromStr;

/// 連絡先の表示・編集項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Mobile1,
    Mobile2,
    Email,
    Address,
    Location,
}

impl ContactField {
    /// 表示順
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Mobile1,
        ContactField::Mobile2,
        ContactField::Email,
        ContactField::Address,
        ContactField::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Mobile1 => "mobile1",
            ContactField::Mobile2 => "mobile2",
            ContactField::Email => "email",
            ContactField::Address => "address",
            ContactField::Location => "location",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "氏名",
            ContactField::Mobile1 => "電話番号1",
            ContactField::Mobile2 => "電話番号2",
            ContactField::Email => "メール",
            ContactField::Address => "住所",
            ContactField::Location => "所在地",
        }
    }

    pub fn get<'a>(&self, record: &'a ContactRecord) -> &'a str {
        match self {
            ContactField::Name => &record.name,
            ContactField::Mobile1 => &record.mobile1,
            ContactField::Mobile2 => &record.mobile2,
            ContactField::Email => &record.email,
            ContactField::Address => &record.address,
            ContactField::Location => &record.location,
        }
    }

    fn slot<'a>(&self, record: &'a mut ContactRecord) -> &'a mut String {
        match self {
            ContactField::Name => &mut record.name,
            ContactField::Mobile1 => &mut record.mobile1,
            ContactField::Mobile2 => &mut record.mobile2,
            ContactField::Email => &mut record.email,
            ContactField::Address => &mut record.address,
            ContactField::Location => &mut record.location,
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown contact field: {}", s))
    }
}

/// 一覧の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: RecordId,
    /// ContactField::ALL の順
    pub cells: [String; 6],
}

impl ContactRow {
    pub fn from_record(record: &ContactRecord) -> Self {
        Self {
            id: record.id.clone(),
            cells: ContactField::ALL.map(|f| f.get(record).to_string()),
        }
    }
}

/// 連絡先ごとに1行。値は加工しない。
pub fn table_rows(records: &[ContactRecord]) -> Vec<ContactRow> {
    records.iter().map(ContactRow::from_record).collect()
}

/// 編集ダイアログの状態
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    buffer: ContactRecord,
    /// 保存処理中（保存ボタン無効）
    saving: bool,
}

/// 削除確認ダイアログの状態
#[derive(Debug, Clone, PartialEq, Eq)]
struct DeleteConfirm {
    target: RecordId,
    /// 削除処理中（確定ボタン無効）
    pending: bool,
}

/// 連絡先一覧の編集状態
#[derive(Debug, Clone, Default)]
pub struct ContactEditor {
    edit: Option<EditSession>,
    delete_confirm: Option<DeleteConfirm>,
    pub notification: NotificationState,
}

impl ContactEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 編集ダイアログを開く。開いていればバッファを置き換える。
    pub fn begin_edit(&mut self, record: &ContactRecord) {
        log::debug!("begin edit: contact {}", record.id);
        self.edit = Some(EditSession { buffer: record.clone(), saving: false });
    }

    /// バッファの1項目を上書きする。ダイアログが閉じていれば何もしない。
    pub fn update_buffer_field(&mut self, field: ContactField, value: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            *field.slot(&mut edit.buffer) = value.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            log::debug!("cancel edit: contact {}", edit.buffer.id);
        }
    }

    pub fn is_edit_open(&self) -> bool {
        self.edit.is_some()
    }

    pub fn edit_buffer(&self) -> Option<&ContactRecord> {
        self.edit.as_ref().map(|e| &e.buffer)
    }

    /// 編集中の項目値（ダイアログが閉じていれば空文字）
    pub fn buffer_value(&self, field: ContactField) -> String {
        self.edit_buffer()
            .map(|b| field.get(b).to_string())
            .unwrap_or_default()
    }

    /// 保存要求。ダイアログは保存結果が返るまで開いたまま。保存中の再要求はNone。
    pub fn save_edit(&mut self) -> Option<ContactRecord> {
        let edit = self.edit.as_mut()?;
        if edit.saving {
            return None;
        }
        edit.saving = true;
        Some(edit.buffer.clone())
    }

    pub fn is_save_pending(&self) -> bool {
        self.edit.as_ref().is_some_and(|e| e.saving)
    }

    /// 保存結果を反映する。成功で閉じ、失敗ならバッファを残してエラー通知。
    ///
    /// 保存中の同じ連絡先にだけ効く。キャンセル後や別の連絡先の編集中に
    /// 届いた結果はダイアログを変更しない。
    pub fn finish_save(&mut self, id: &RecordId, result: Result<()>) -> Option<HideTicket> {
        let matches = self
            .edit
            .as_ref()
            .is_some_and(|e| e.saving && &e.buffer.id == id);
        match result {
            Ok(()) if matches => {
                self.edit = None;
                Some(self.notify("連絡先を保存しました", Severity::Success))
            }
            Ok(()) => {
                log::debug!("late save result ignored: contact {}", id);
                None
            }
            Err(e) => {
                if matches {
                    if let Some(edit) = self.edit.as_mut() {
                        edit.saving = false;
                    }
                }
                log::warn!("save contact {} failed: {}", id, e);
                Some(self.notify(format!("保存に失敗しました: {}", e), Severity::Error))
            }
        }
    }

    /// 削除確認ダイアログを開く。まだ何も削除しない。
    pub fn request_delete(&mut self, id: RecordId) {
        log::debug!("request delete: contact {}", id);
        self.delete_confirm = Some(DeleteConfirm { target: id, pending: false });
    }

    /// 削除を確定し、永続化処理へ渡すIDを返す。処理中の再確定はNone。
    pub fn confirm_delete(&mut self) -> Option<RecordId> {
        let confirm = self.delete_confirm.as_mut()?;
        if confirm.pending {
            return None;
        }
        confirm.pending = true;
        Some(confirm.target.clone())
    }

    /// 削除結果を反映する。処理中の同じ連絡先なら結果に関わらずダイアログを閉じる。
    pub fn finish_delete(&mut self, id: &RecordId, result: Result<()>) -> Option<HideTicket> {
        let matches = self
            .delete_confirm
            .as_ref()
            .is_some_and(|c| c.pending && &c.target == id);
        if matches {
            self.delete_confirm = None;
        } else {
            log::debug!("late delete result for contact {} leaves dialog as is", id);
        }
        match result {
            Ok(()) => None,
            Err(e) => {
                log::warn!("delete contact {} failed: {}", id, e);
                Some(self.notify(format!("削除に失敗しました: {}", e), Severity::Error))
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_confirm = None;
    }

    pub fn is_delete_open(&self) -> bool {
        self.delete_confirm.is_some()
    }

    pub fn is_delete_pending(&self) -> bool {
        self.delete_confirm.as_ref().is_some_and(|c| c.pending)
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> HideTicket {
        self.notification.notify(message, severity)
    }

    pub fn dismiss_notification(&mut self, reason: DismissReason) -> bool {
        self.notification.dismiss(reason)
    }
}
