pub mod samples;

#[cfg(test)]
mod classification;
#[cfg(test)]
mod concurrency;
#[cfg(test)]
mod props;
