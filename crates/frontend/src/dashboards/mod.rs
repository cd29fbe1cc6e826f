pub mod d400_finance;
