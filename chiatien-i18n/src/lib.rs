#[cfg(all(feature = "vi", feature = "en"))]
compile_error!("Cannot enable both 'vi' and 'en' features at the same time");

#[cfg(feature = "vi")]
pub mod strings {
    pub const MEMBER: &str = "Thành viên";
    pub const PAID: &str = "Đã chi";
    pub const SHARE: &str = "Phần phải trả";
    pub const BALANCE: &str = "Chênh lệch";
    pub const STATUS: &str = "Trạng thái";
    pub const AMOUNT: &str = "Số tiền";
    pub const PURPOSE: &str = "Mục đích";
    pub const DATE: &str = "Ngày";
    pub const PARTICIPANTS: &str = "Người tham gia";
    pub const EVERYONE: &str = "Tất cả";
    pub const WILL_RECEIVE: &str = "Được nhận lại";
    pub const OWES: &str = "Cần trả thêm";
    pub const SETTLED: &str = "Cân bằng";
    pub const ALL_SETTLED: &str = "Tất cả đã cân bằng!";
    pub const NO_DATA: &str = "Chưa có dữ liệu";
    pub const SETTLEMENT_HEADING: &str = "Cách chia tiền:";
    pub const TOTAL_AMOUNT: &str = "Tổng chi";
    pub const TOTAL_COUNT: &str = "Số khoản chi";
    pub const AVERAGE_AMOUNT: &str = "Trung bình";
    pub const ACTION: &str = "Thao tác";
    pub const TIMESTAMP: &str = "Thời gian";
    pub const PERSON_NOT_FOUND: &str = "Không tìm thấy người này";
    pub const EXPENSE_NOT_FOUND: &str = "Không tìm thấy chi tiêu";
    pub const NOTHING_TO_ARCHIVE: &str = "Không có chi tiêu nào để lưu trữ";
    pub const CURRENCY_SUFFIX: &str = "VND";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const BALANCE: &str = "Balance";
    pub const STATUS: &str = "Status";
    pub const AMOUNT: &str = "Amount";
    pub const PURPOSE: &str = "Purpose";
    pub const DATE: &str = "Date";
    pub const PARTICIPANTS: &str = "Participants";
    pub const EVERYONE: &str = "Everyone";
    pub const WILL_RECEIVE: &str = "Will receive";
    pub const OWES: &str = "Owes";
    pub const SETTLED: &str = "Settled";
    pub const ALL_SETTLED: &str = "Everyone is settled!";
    pub const NO_DATA: &str = "No data yet";
    pub const SETTLEMENT_HEADING: &str = "How to settle:";
    pub const TOTAL_AMOUNT: &str = "Total spent";
    pub const TOTAL_COUNT: &str = "Expenses";
    pub const AVERAGE_AMOUNT: &str = "Average";
    pub const ACTION: &str = "Action";
    pub const TIMESTAMP: &str = "Time";
    pub const PERSON_NOT_FOUND: &str = "Person not found";
    pub const EXPENSE_NOT_FOUND: &str = "Expense not found";
    pub const NOTHING_TO_ARCHIVE: &str = "No expenses to archive";
    pub const CURRENCY_SUFFIX: &str = "VND";
}

#[cfg(not(any(feature = "vi", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const SHARE: &str = "Share";
    pub const BALANCE: &str = "Balance";
    pub const STATUS: &str = "Status";
    pub const AMOUNT: &str = "Amount";
    pub const PURPOSE: &str = "Purpose";
    pub const DATE: &str = "Date";
    pub const PARTICIPANTS: &str = "Participants";
    pub const EVERYONE: &str = "Everyone";
    pub const WILL_RECEIVE: &str = "Will receive";
    pub const OWES: &str = "Owes";
    pub const SETTLED: &str = "Settled";
    pub const ALL_SETTLED: &str = "Everyone is settled!";
    pub const NO_DATA: &str = "No data yet";
    pub const SETTLEMENT_HEADING: &str = "How to settle:";
    pub const TOTAL_AMOUNT: &str = "Total spent";
    pub const TOTAL_COUNT: &str = "Expenses";
    pub const AVERAGE_AMOUNT: &str = "Average";
    pub const ACTION: &str = "Action";
    pub const TIMESTAMP: &str = "Time";
    pub const PERSON_NOT_FOUND: &str = "Person not found";
    pub const EXPENSE_NOT_FOUND: &str = "Expense not found";
    pub const NOTHING_TO_ARCHIVE: &str = "No expenses to archive";
    pub const CURRENCY_SUFFIX: &str = "VND";
}

pub use strings::*;

#[cfg(feature = "vi")]
pub fn expense_created(id: u64) -> String {
    format!("Đã thêm chi tiêu #{id}")
}

#[cfg(feature = "vi")]
pub fn expense_updated(id: u64) -> String {
    format!("Đã cập nhật chi tiêu #{id}")
}

#[cfg(feature = "vi")]
pub fn expense_deleted(id: u64) -> String {
    format!("Đã xóa chi tiêu #{id}")
}

#[cfg(feature = "vi")]
pub fn history_cleared(count: usize) -> String {
    format!("Đã xóa {count} mục lịch sử")
}

#[cfg(feature = "vi")]
pub fn expenses_archived(count: usize) -> String {
    format!("Đã lưu trữ {count} khoản chi")
}

#[cfg(feature = "en")]
pub fn expense_created(id: u64) -> String {
    format!("Added expense #{id}")
}

#[cfg(feature = "en")]
pub fn expense_updated(id: u64) -> String {
    format!("Updated expense #{id}")
}

#[cfg(feature = "en")]
pub fn expense_deleted(id: u64) -> String {
    format!("Deleted expense #{id}")
}

#[cfg(feature = "en")]
pub fn history_cleared(count: usize) -> String {
    format!("Cleared {count} history entries")
}

#[cfg(feature = "en")]
pub fn expenses_archived(count: usize) -> String {
    format!("Archived {count} expenses")
}

#[cfg(not(any(feature = "vi", feature = "en")))]
pub fn expense_created(id: u64) -> String {
    format!("Added expense #{id}")
}

#[cfg(not(any(feature = "vi", feature = "en")))]
pub fn expense_updated(id: u64) -> String {
    format!("Updated expense #{id}")
}

#[cfg(not(any(feature = "vi", feature = "en")))]
pub fn expense_deleted(id: u64) -> String {
    format!("Deleted expense #{id}")
}

#[cfg(not(any(feature = "vi", feature = "en")))]
pub fn history_cleared(count: usize) -> String {
    format!("Cleared {count} history entries")
}

#[cfg(not(any(feature = "vi", feature = "en")))]
pub fn expenses_archived(count: usize) -> String {
    format!("Archived {count} expenses")
}
