//! Word sourcing for crosswords: user input, the LLM supplier, and the
//! request pipeline that hands clean words to the placement engine.

pub mod generator;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod supplier;

#[cfg(test)]
pub mod test_support;
