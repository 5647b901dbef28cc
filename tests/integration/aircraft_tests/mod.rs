mod flight;
mod stabilization;
