pub mod ledger_writer;
pub mod op_reader;
