mod latex;
mod output;
mod samples;
