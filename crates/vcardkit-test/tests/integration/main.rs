mod cli_run;
mod files;
mod helpers;
mod threads;
