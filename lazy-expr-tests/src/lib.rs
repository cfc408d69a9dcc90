pub mod vectors;

#[cfg(test)]
mod properties;
