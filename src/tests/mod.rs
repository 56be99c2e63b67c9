mod outcome;
mod pageviews;
mod res;
mod suggest;
