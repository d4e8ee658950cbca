pub mod d001_report_summary;
