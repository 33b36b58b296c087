mod common;
mod screener;
