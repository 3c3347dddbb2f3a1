pub mod popup_sheet;
