pub mod caterer_handler;
