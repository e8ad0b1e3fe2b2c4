pub mod viewer_args;
