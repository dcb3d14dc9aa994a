// TUI widget modules for each dashboard panel.

pub mod injured;
pub mod rankings;
pub mod status_bar;
pub mod team_select;
pub mod trade_result;
