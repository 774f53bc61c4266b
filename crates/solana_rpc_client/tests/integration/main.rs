mod client;
mod coalescer;
