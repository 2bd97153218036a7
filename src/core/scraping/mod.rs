mod pipeline;


pub use pipeline::ScrapePipeline;
