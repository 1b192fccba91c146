mod accounts;
mod constellations;
mod discovery;
mod errors;
mod ideas;
