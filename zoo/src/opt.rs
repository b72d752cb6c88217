use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "zoo",
    version,
    about = "Client-side wrapper for Yale CPSC's Zoo submit system."
)]
pub struct Opts {
    #[clap(subcommand)]
    pub cmd: SubCmd,

    #[clap(flatten)]
    pub opt: GlobalOpts,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Configuration file to use, defaults to ~/.zoo_config
    #[clap(long = "config-file", global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// SSH client configuration to install the Zoo host into, defaults to
    /// ~/.ssh/config
    #[clap(long = "ssh-config", global = true, value_name = "PATH")]
    pub ssh_config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCmd {
    /// Write the configuration file and set up SSH access to the Zoo
    #[clap(name = "config")]
    Config(ConfigSubCmd),

    /// Upload a file to the Zoo, then optionally autograde and submit it
    #[clap(name = "up")]
    Up(UpSubCmd),

    /// Download a file from the Zoo
    #[clap(name = "dn")]
    Dn(DnSubCmd),
}

#[derive(Args, Debug, Clone)]
pub struct ConfigSubCmd {
    pub net_id: String,

    /// e.g., 'cs201'
    pub class_label: String,
}

#[derive(Args, Debug, Clone)]
pub struct UpSubCmd {
    /// Homework assignment number
    pub hw_num: u32,

    /// Path to source file to upload to Zoo
    pub local_file: String,

    /// Path to destination directory on the Zoo
    pub zoo_dest: String,

    /// Runs Zoo autograde tests on all specified problem numbers (e.g. --test 1 2 4)
    #[clap(
        long = "test",
        value_name = "PROB_NUMS",
        multiple_values = true,
        min_values = 0
    )]
    pub prob_nums: Option<Vec<u32>>,

    /// Display full Zoo outputs
    #[clap(short = 'v')]
    pub verbose: bool,

    /// Submit the uploaded assignment
    #[clap(long)]
    pub submit: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DnSubCmd {
    /// Path to source file on the Zoo
    pub zoo_path: String,

    /// Path to local destination directory
    pub local_dest: String,

    /// Interpret zoo_path as relative to your class' directory in /home/classes/
    #[clap(short = 'c')]
    pub class_relative: bool,
}
