mod common;
mod flags;
mod hackathons;
mod runs;
mod teams;
