mod helpers;
mod static_files;
